//! Personal info command handlers

use anyhow::{bail, Result};
use clap::Args;

use resumecraft_core::{PersonalInfoPatch, ResumeStore};

use crate::editor::edit_text;
use crate::output::Output;

use super::warn_if_unsaved;

/// Fields accepted by `personal set`; pass an empty string to clear one
#[derive(Args, Debug, Default)]
pub struct SetArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// Professional title
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    /// Professional summary
    #[arg(long, conflicts_with = "edit_summary")]
    pub summary: Option<String>,
    /// Write the summary in $EDITOR
    #[arg(long)]
    pub edit_summary: bool,
}

impl SetArgs {
    fn into_patch(self) -> PersonalInfoPatch {
        PersonalInfoPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            title: self.title,
            email: self.email,
            phone: self.phone,
            location: self.location,
            linkedin: self.linkedin,
            website: self.website,
            summary: self.summary,
        }
    }
}

/// Show contact details and summary
pub fn show(store: &ResumeStore, output: &Output) -> Result<()> {
    output.print_personal(&store.resume().personal_info)
}

/// Merge the given fields into personal info
pub fn set(store: &mut ResumeStore, args: SetArgs, output: &Output) -> Result<()> {
    let edit_summary = args.edit_summary;
    let mut patch = args.into_patch();

    if edit_summary {
        patch.summary = Some(edit_text(&store.resume().personal_info.summary)?);
    }

    if patch.is_empty() {
        bail!("Nothing to set. Pass at least one field, e.g. --first-name Ada");
    }

    store.update_personal_info(patch);
    warn_if_unsaved(store, output);

    output.success("Personal info updated");
    output.print_personal(&store.resume().personal_info)
}
