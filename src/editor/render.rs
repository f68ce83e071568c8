//! ASCII rendering of the goal list and the input prompt.

use super::{EditorMode, GoalEditor};
use crate::models::Goal;

const TITLE: &str = "Goal Creator";
const EDITING: char = '✎';

/// Render the goal list with suggestions nested under each goal.
///
/// Example output:
/// ```text
/// Goal Creator
/// ├── Run 5k  #1718000000000
/// │   └── Start slow
/// └── ✎ Learn Rust  #1718000000001
/// ```
pub fn render_goals(editor: &GoalEditor) -> String {
    let mut output = String::new();
    output.push_str(TITLE);
    output.push('\n');

    let goals = editor.goals();
    for (i, goal) in goals.iter().enumerate() {
        let is_last = i == goals.len() - 1;
        let is_target = editor.editing() == Some(goal.id);
        render_goal(&mut output, goal, is_last, is_target);
    }
    output
}

fn render_goal(output: &mut String, goal: &Goal, is_last: bool, is_target: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(branch);
    if is_target {
        output.push(EDITING);
        output.push(' ');
    }
    output.push_str(&goal.text);
    output.push_str("  #");
    output.push_str(&goal.id.to_string());
    output.push('\n');

    // Suggestions are often multi-line; an empty one is not shown.
    if goal.suggestions.is_empty() {
        return;
    }
    let continuation = if is_last { "    " } else { "│   " };
    let mut lines = goal.suggestions.lines();
    if let Some(first) = lines.next() {
        output.push_str(continuation);
        output.push_str("└── ");
        output.push_str(first);
        output.push('\n');
    }
    for line in lines {
        output.push_str(continuation);
        output.push_str("    ");
        output.push_str(line);
        output.push('\n');
    }
}

/// Render the input prompt, e.g. `[Add] > ` or `[Update] Run 5k > `.
///
/// While a request is in flight the action is shown as `[...]`.
pub fn render_prompt(editor: &GoalEditor) -> String {
    let label = if editor.is_busy() {
        "..."
    } else {
        editor.mode().action_label()
    };
    match editor.mode() {
        EditorMode::Edit(_) if !editor.input().is_empty() => {
            format!("[{}] {} > ", label, editor.input())
        }
        _ => format!("[{}] > ", label),
    }
}
