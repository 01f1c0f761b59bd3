use std::io::Write;

use anyhow::bail;
use folio_models::contact::{validate, FieldId};

/// Prints `valid` or the message shown next to the field.
pub fn run(field: FieldId, value: &str, out: &mut impl Write) -> anyhow::Result<()> {
    match validate(field, value) {
        Ok(()) => {
            writeln!(out, "valid")?;
            Ok(())
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            bail!("{} is invalid", field.label());
        }
    }
}
