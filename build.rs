// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds git metadata for `scopekit version`. Outside a git checkout vergen
//! emits `VERGEN_IDEMPOTENT_OUTPUT` placeholders, which `scopekit::version`
//! drops so only the package version is shown.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
