//! Show or change the persisted locale

use anyhow::Result;

use crate::i18n::Locale;
use crate::Portal;

/// Print the current locale, or set and persist a new one
pub fn run(portal: &Portal, code: Option<&str>) -> Result<()> {
    let mut i18n = portal.i18n()?;

    match code {
        Some(code) => {
            let locale = Locale::parse(code).ok_or_else(|| {
                let supported: Vec<_> = Locale::ALL.iter().map(Locale::as_str).collect();
                anyhow::anyhow!(
                    "Unknown locale: {}. Available: {}",
                    code,
                    supported.join(", ")
                )
            })?;
            i18n.set_locale(locale)?;
            println!("Locale set to {}", locale);
        }
        None => {
            println!("Current locale: {}", i18n.locale());
        }
    }

    Ok(())
}
