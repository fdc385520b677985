//! Formatting options for named basis terms.

/// The fixed letter translation table for dimensions up to 32.
///
/// Position `k` is the letter of basis vector `e_k`: `1` for the unit, then
/// `i j k` (complex/quaternion), `L I J K` (octonion), `m p q r M P Q R`
/// (sedenion) and `n s t u N S T U o v w x O V W X` (pathion).
pub const TRANSLATIONS: [char; 32] = [
    '1', 'i', 'j', 'k', 'L', 'I', 'J', 'K', 'm', 'p', 'q', 'r', 'M', 'P', 'Q', 'R', 'n', 's', 't',
    'u', 'N', 'S', 'T', 'U', 'o', 'v', 'w', 'x', 'O', 'V', 'W', 'X',
];

/// Options controlling how basis terms render.
///
/// Built with the builder setters, defaults matching the symbolic `e<k>`
/// form:
///
/// ```
/// use hypercomplex::BasisFormat;
/// let format = BasisFormat::new().translate(true).show_plus(true);
/// ```
#[derive(Clone, Debug)]
pub struct BasisFormat {
    pub(crate) element: char,
    pub(crate) indices: Vec<char>,
    pub(crate) translate: bool,
    pub(crate) show_plus: bool,
}

impl BasisFormat {
    /// Default options: element `e`, the fixed 32-letter table, no
    /// translation, no leading `+`.
    pub fn new() -> Self {
        BasisFormat {
            element: 'e',
            indices: TRANSLATIONS.to_vec(),
            translate: false,
            show_plus: false,
        }
    }

    /// Set the symbolic element letter (default `e`).
    #[must_use]
    pub fn element(mut self, element: char) -> Self {
        self.element = element;
        self
    }

    /// Replace the letter translation table.
    ///
    /// Translation only applies to algebras whose dimension fits the table.
    #[must_use]
    pub fn indices(mut self, indices: &str) -> Self {
        self.indices = indices.chars().collect();
        self
    }

    /// Render letters instead of `e<k>` when the dimension fits the
    /// translation table.
    #[must_use]
    pub fn translate(mut self, translate: bool) -> Self {
        self.translate = translate;
        self
    }

    /// Prefix positive terms with `+`.
    #[must_use]
    pub fn show_plus(mut self, show_plus: bool) -> Self {
        self.show_plus = show_plus;
        self
    }

    /// The configured translation letters.
    pub fn letters(&self) -> &[char] {
        &self.indices
    }
}

impl Default for BasisFormat {
    fn default() -> Self {
        BasisFormat::new()
    }
}
