// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;

use crate::{Area, TextMeasurer, TextOverflow, TextStyle};

/// Appended to text cut off by [`TextOverflow::Ellipsis`].
pub const ELLIPSIS: char = '\u{2026}';

/// The text to draw for `text` laid out with `style` at `area.width`.
///
/// With [`TextOverflow::Ellipsis`] and a `max_lines` limit that `text`
/// exceeds, this is the longest prefix of `text` which, followed by
/// [`ELLIPSIS`], still wraps within `max_lines`. Otherwise `text` is returned
/// unchanged, so [`TextOverflow::Clip`] keeps dropping whole lines.
///
/// Prefixes are searched by bisection, so wrapping is assumed not to shrink
/// as the prefix grows.
pub fn ellipsize<'a, M>(measurer: &mut M, text: &'a str, style: &TextStyle, area: Area) -> Cow<'a, str>
where
    M: TextMeasurer + ?Sized,
{
    let Some(max_lines) = style.max_lines else {
        return Cow::Borrowed(text);
    };
    if style.overflow != TextOverflow::Ellipsis {
        return Cow::Borrowed(text);
    }
    let area = Area::unbounded_height(area.width);
    if measurer.measure(text, style, area).total_lines <= max_lines {
        return Cow::Borrowed(text);
    }

    // Byte offsets of every proper prefix; the bare ellipsis is the fallback.
    let ends: Vec<usize> = text.char_indices().map(|(index, _)| index).collect();
    let (mut fits, mut overflows) = (0, ends.len());
    while overflows - fits > 1 {
        let mid = fits + (overflows - fits) / 2;
        let candidate = with_ellipsis(&text[..ends[mid]]);
        if measurer.measure(&candidate, style, area).total_lines <= max_lines {
            fits = mid;
        } else {
            overflows = mid;
        }
    }
    let truncated = with_ellipsis(&text[..ends[fits]]);
    log::trace!("ellipsized {text:?} to {truncated:?}");
    Cow::Owned(truncated)
}

fn with_ellipsis(prefix: &str) -> String {
    let mut out = prefix.trim_end().to_owned();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{ellipsize, ELLIPSIS};
    use crate::{Area, HeuristicMeasurer, TextMeasurer, TextOverflow, TextStyle};

    // 5 px per character, 10 characters per 50 px line.
    fn measurer() -> HeuristicMeasurer {
        HeuristicMeasurer::new(0.5)
    }

    #[test]
    fn ellipsis_ends_last_visible_line() {
        let style = TextStyle::new(10.0).with_max_lines(1, TextOverflow::Ellipsis);
        let text = ellipsize(&mut measurer(), "aaaa bbbb cccc", &style, Area::new(50.0, 10.0));
        assert_eq!(text, "aaaa bbbb\u{2026}");
        let probe = measurer().measure(&text, &style, Area::unbounded_height(50.0));
        assert!(!probe.is_truncated());
    }

    #[test]
    fn ellipsis_differs_from_clip() {
        let text = "aaaa bbbb cccc dddd eeee";
        let area = Area::new(50.0, 100.0);
        let clip = TextStyle::new(10.0).with_max_lines(2, TextOverflow::Clip);
        let ellipsis = clip.with_max_lines(2, TextOverflow::Ellipsis);
        assert!(matches!(ellipsize(&mut measurer(), text, &clip, area), Cow::Borrowed(t) if t == text));
        let cut = ellipsize(&mut measurer(), text, &ellipsis, area);
        assert_eq!(cut, "aaaa bbbb cccc dddd\u{2026}");
    }

    #[test]
    fn ellipsis_leaves_fitting_text_alone() {
        let style = TextStyle::new(10.0).with_max_lines(2, TextOverflow::Ellipsis);
        let text = ellipsize(&mut measurer(), "aaaa bbbb", &style, Area::new(50.0, 10.0));
        assert!(matches!(text, Cow::Borrowed("aaaa bbbb")));
    }

    #[test]
    fn ellipsis_replaces_hard_break() {
        let style = TextStyle::new(10.0).with_max_lines(1, TextOverflow::Ellipsis);
        let text = ellipsize(&mut measurer(), "a\nb", &style, Area::new(50.0, 10.0));
        assert_eq!(text, format!("a{ELLIPSIS}"));
    }
}
