use std::{
    fs,
    io::{self, IsTerminal, Read},
};

use anyhow::{Context, Result};
use log::info;

use super::cli::TextSource;

/// Sample text used when nothing is piped in and no file is given.
pub(super) const SAMPLE_TEXT: &str = "En un lugar de la Mancha, de cuyo nombre no quiero \
acordarme, no ha mucho tiempo que vivía un hidalgo de los de lanza en astillero, adarga \
antigua, rocín flaco y galgo corredor. Una olla de algo más vaca que carnero, salpicón las \
más noches, duelos y quebrantos los sábados, lantejas los viernes, algún palomino de \
añadidura los domingos, consumían las tres partes de su hacienda...";

pub(super) fn load_text(source: &TextSource) -> Result<String> {
    match source {
        TextSource::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            info!("loaded {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        TextSource::Stdin => read_stdin(),
        TextSource::Auto => {
            if io::stdin().is_terminal() {
                info!("no input given; using sample text");
                Ok(SAMPLE_TEXT.to_string())
            } else {
                read_stdin()
            }
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read standard input")?;
    info!("loaded {} bytes from stdin", text.len());
    Ok(text)
}
