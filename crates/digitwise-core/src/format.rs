//! Human-readable rendering with digit grouping.

/// How digits are grouped when rendering a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    /// Character placed between groups.
    pub separator: char,
    /// Digits per group, counted from the least-significant end. Zero disables
    /// grouping.
    pub width: usize,
}

impl Grouping {
    /// Grouping that renders the bare digits.
    pub const fn none() -> Self {
        Self {
            separator: ',',
            width: 0,
        }
    }

    /// Group by `width` digits with the given separator.
    pub const fn new(separator: char, width: usize) -> Self {
        Self { separator, width }
    }
}

impl Default for Grouping {
    fn default() -> Self {
        Self {
            separator: ',',
            width: 3,
        }
    }
}

/// Render digits most-significant first, inserting the separator after every
/// `width` digits counted from the end but never after the final digit.
pub fn render(digits: &[u8], grouping: &Grouping) -> String {
    let len = digits.len();
    let separators = if grouping.width == 0 {
        0
    } else {
        len.saturating_sub(1) / grouping.width
    };
    let mut out = String::with_capacity(len + separators * grouping.separator.len_utf8());

    for (index, &digit) in digits.iter().enumerate() {
        out.push(char::from(b'0' + digit));

        let remaining = len - index - 1;
        if grouping.width > 0 && remaining > 0 && remaining % grouping.width == 0 {
            out.push(grouping.separator);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_grouping() {
        let digits = [1, 2, 9, 1, 2, 1, 2, 7];
        assert_eq!(render(&digits, &Grouping::default()), "12,912,127");
    }

    #[test]
    fn test_render_exact_multiple_of_width() {
        assert_eq!(render(&[1, 2, 3, 4, 5, 6], &Grouping::default()), "123,456");
        assert_eq!(render(&[1, 2, 3], &Grouping::default()), "123");
    }

    #[test]
    fn test_render_short_and_zero() {
        assert_eq!(render(&[0], &Grouping::default()), "0");
        assert_eq!(render(&[4, 2], &Grouping::default()), "42");
    }

    #[test]
    fn test_render_custom_grouping() {
        let digits = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(render(&digits, &Grouping::new('_', 4)), "123_4567");
        assert_eq!(render(&digits, &Grouping::new('.', 3)), "1.234.567");
        assert_eq!(render(&digits, &Grouping::none()), "1234567");
    }
}
