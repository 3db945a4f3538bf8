//! Numbered-menu selection flows

use crate::error::{Result, ScaffoldError};
use crate::prompt::Prompter;

/// Numeric tokens only; anything else aborts the run
fn parse_choice(token: &str) -> Result<usize> {
    let token = token.trim();
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(ScaffoldError::InvalidSelection(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| ScaffoldError::InvalidSelection(token.to_string()))
}

/// Present `labels` as 1..N and return the zero-based index picked
pub fn select_one<P: Prompter + ?Sized>(
    prompter: &mut P,
    title: &str,
    labels: &[String],
) -> Result<usize> {
    prompter.message(title)?;
    for (i, label) in labels.iter().enumerate() {
        prompter.message(&format!("{}) {}", i + 1, label))?;
    }

    let token = prompter.number("Type the number")?;
    let choice = parse_choice(&token)?;

    match choice.checked_sub(1).filter(|idx| *idx < labels.len()) {
        Some(idx) => Ok(idx),
        None => Err(ScaffoldError::InvalidSelection(token.trim().to_string())),
    }
}

/// Repeatable pick with a `0) exit selection` sentinel
///
/// Returns zero-based indices in the order first chosen; choosing an item
/// twice keeps one entry. Unknown numbers are reported and the loop goes on.
pub fn select_many<P: Prompter + ?Sized>(
    prompter: &mut P,
    title: &str,
    labels: &[String],
) -> Result<Vec<usize>> {
    let mut selected: Vec<usize> = Vec::new();

    prompter.message(title)?;

    loop {
        prompter.message("0) exit selection")?;
        for (i, label) in labels.iter().enumerate() {
            prompter.message(&format!("{}) {}", i + 1, label))?;
        }

        let token = prompter.number("Type the number")?;
        let token = token.trim();
        if token == "0" {
            break;
        }

        let choice = parse_choice(token)?;
        match choice.checked_sub(1).filter(|idx| *idx < labels.len()) {
            Some(idx) => {
                if !selected.contains(&idx) {
                    selected.push(idx);
                }
            }
            None => prompter.warning(&format!("No option {}", token))?,
        }

        let names: Vec<&str> = selected.iter().map(|&i| labels[i].as_str()).collect();
        prompter.message(&format!("Selected: [{}]", names.join(", ")))?;
        prompter.message("Select another one:")?;
    }

    Ok(selected)
}
