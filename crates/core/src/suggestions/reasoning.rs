//! Human-readable justifications for suggestions

use super::palette::{ColorPalette, OccasionLabels};
use crate::domain::clothing::ClothingItem;

#[derive(Debug, Clone, Default)]
pub struct ReasonWriter {
    palette: ColorPalette,
    occasions: OccasionLabels,
}

impl ReasonWriter {
    pub fn new(palette: ColorPalette, occasions: OccasionLabels) -> Self {
        Self { palette, occasions }
    }

    /// Justification for wearing `first` with `second`.
    ///
    /// The color clause consults the palette from `first` to `second`; the
    /// reverse direction is never checked.
    pub fn reason(
        &self,
        first: &ClothingItem,
        second: Option<&ClothingItem>,
        occasion: Option<&str>,
    ) -> String {
        let mut reason = first.name.clone();

        if let Some(second) = second {
            reason.push_str(" paired with ");
            reason.push_str(&second.name);

            if self.palette.is_complementary(&first.color, &second.color) {
                reason.push_str(&format!(
                    ". {} and {} is a classic pairing!",
                    first.color, second.color
                ));
            } else {
                reason.push_str(&format!(
                    ". {} and {} make a clean, simple pairing.",
                    first.color, second.color
                ));
            }
        }

        if let Some(occasion) = occasion.filter(|value| !value.trim().is_empty()) {
            let separator = if reason.ends_with(['.', '!']) { " " } else { ". " };
            reason.push_str(separator);
            reason.push_str(&format!(
                "Well suited for {} occasions.",
                self.occasions.label(occasion)
            ));
        }

        reason
    }

    /// `base` extended with an outerwear clause.
    pub fn layered(&self, base: &str, outerwear: &ClothingItem) -> String {
        format!("{base} Finish with the {} on top; it adds more layering.", outerwear.name)
    }
}
