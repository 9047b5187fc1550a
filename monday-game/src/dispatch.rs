//! Numbered menus and validated selection.
use log::debug;

use crate::constants::{CHOICE_PROMPT, INVALID_CHOICE};
use crate::host::{Host, HostError};
use crate::scene::{Choice, Menu};

/// Parse a 1-based selection out of `options`. Surrounding whitespace is
/// ignored; anything else that is not an integer in range is rejected.
#[must_use]
pub fn parse_selection(line: &str, options: usize) -> Option<usize> {
    let index = line.trim().parse::<usize>().ok()?;
    (1..=options).contains(&index).then_some(index)
}

/// Menu block as shown to the player.
#[must_use]
pub fn render(menu: &Menu) -> Vec<String> {
    let mut lines = Vec::with_capacity(menu.choices.len() + 3);
    lines.push(String::new());
    lines.push(menu.title.to_string());
    lines.extend(
        menu.choices
            .iter()
            .enumerate()
            .map(|(i, choice)| format!("  {}. {}", i + 1, choice.label)),
    );
    lines.push(String::new());
    lines
}

/// Show `menu` and prompt until a valid option is picked.
///
/// Invalid input prints a notice and changes nothing. Counting the choice
/// and saving are left to the caller, which owns the progress store.
///
/// # Errors
///
/// Propagates host failures, including [`HostError::InputClosed`].
pub async fn choose<H: Host + ?Sized>(host: &mut H, menu: &Menu) -> Result<Choice, HostError> {
    for line in render(menu) {
        host.output(&line).await?;
    }
    loop {
        let answer = host.prompt(CHOICE_PROMPT).await?;
        if let Some(index) = parse_selection(&answer, menu.choices.len()) {
            let choice = menu.choices[index - 1];
            debug!("'{}' -> {} ({})", menu.title.trim(), choice.label, choice.target);
            return Ok(choice);
        }
        host.output(INVALID_CHOICE).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScriptedHost;
    use crate::scene::SceneId;
    use futures::executor::block_on;

    const MENU: Menu = Menu {
        title: "   AT SCHOOL    ",
        choices: &[
            Choice {
                label: "ROAM HALLS",
                target: SceneId::RoamHalls,
            },
            Choice {
                label: "GO TO LIBRARY",
                target: SceneId::Library,
            },
        ],
        counted: true,
    };

    #[test]
    fn selection_bounds() {
        assert_eq!(parse_selection("1", 3), Some(1));
        assert_eq!(parse_selection("  3 \t", 3), Some(3));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
        assert_eq!(parse_selection("two", 3), None);
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("1.0", 3), None);
    }

    #[test]
    fn renders_numbered_options() {
        let lines = render(&MENU);
        assert_eq!(lines[1], "   AT SCHOOL    ");
        assert_eq!(lines[2], "  1. ROAM HALLS");
        assert_eq!(lines[3], "  2. GO TO LIBRARY");
    }

    #[test]
    fn reprompts_until_valid() {
        let mut host = ScriptedHost::new(["x", "9", "", " 2"]);
        let choice = block_on(choose(&mut host, &MENU)).unwrap();
        assert_eq!(choice.target, SceneId::Library);
        assert_eq!(host.prompts(), 4);
        assert_eq!(host.count(INVALID_CHOICE), 3);
    }

    #[test]
    fn closed_input_propagates() {
        let mut host = ScriptedHost::new(["nope"]);
        assert!(matches!(
            block_on(choose(&mut host, &MENU)),
            Err(HostError::InputClosed)
        ));
    }
}
