use dahlia_config::{CallbackKind, CallbackTarget};

/// Format a task's node label as Graphviz HTML-like markup (without the
/// outer `<` `>` delimiters, which the DOT emitter adds).
///
/// Layout: task name header, one colored badge per inherited default
/// callback, action footer. The footer is HTML-escaped and its periods are
/// written as `&#46;` so dotted action paths survive any downstream
/// interpretation of `.` as a separator.
pub fn format_label(
  task_name: &str,
  action: &str,
  defaults: &[(CallbackKind, Vec<CallbackTarget>)],
) -> String {
  let badges: Vec<String> = defaults
    .iter()
    .flat_map(|(kind, targets)| {
      targets.iter().map(|target| {
        format!(
          "<FONT POINT-SIZE=\"10\" COLOR=\"{}\">{}</FONT>",
          kind.color(),
          target.task_name(),
        )
      })
    })
    .collect();

  format!(
    "{}<BR />{}<BR /><FONT POINT-SIZE=\"10\">{}</FONT>",
    task_name,
    badges.join(" "),
    escape_html(action).replace('.', "&#46;"),
  )
}

/// Escape a string for HTML-like label content.
fn escape_html(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
    .replace('\'', "&#x27;")
}
