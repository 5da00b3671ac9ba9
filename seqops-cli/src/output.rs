use std::fmt::Display;
use std::io::Write;

pub(crate) fn print_option<T: Display>(value: Option<T>) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match value {
        Some(value) => writeln!(stdout, "{}", value)?,
        None => writeln!(stdout, "none")?,
    }
    Ok(())
}

pub(crate) fn print_list<T: Display>(values: &[T]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    let line = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(stdout, "{}", line)?;
    Ok(())
}
