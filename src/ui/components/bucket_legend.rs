use crate::constants::{LEGEND_SEPARATOR, VIEW_TITLE};
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};

/// Header listing every bucket in its own color, sorted by name:
/// `Tasks [academic|personal|work]`
pub fn legend_line(theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{} [", VIEW_TITLE))];

    for (i, (name, style)) in theme.legend().enumerate() {
        if i > 0 {
            spans.push(Span::raw(LEGEND_SEPARATOR));
        }
        spans.push(Span::styled(name.to_string(), style));
    }

    spans.push(Span::raw("]"));
    Line::from(spans)
}
