// ============================================================================
// Physical Constants
// Compiled-in fundamental constants and CODATA reference datasets
// ============================================================================

use crate::numeric::{FloatingDecimal, NumericResult};

/// A named literal physical constant with optional stated uncertainty.
///
/// Values are compiled-in decimal literals, never computed. Parsing a literal
/// is exact; rounding to working precision happens inside the arithmetic that
/// consumes the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalConstant {
    /// Short symbol, e.g. "G", "h", "1/alpha"
    pub symbol: &'static str,
    /// Provenance of the value, e.g. "CODATA 2022"
    pub source: &'static str,
    literal: &'static str,
    sigma_literal: Option<&'static str>,
}

impl PhysicalConstant {
    const fn new(
        symbol: &'static str,
        source: &'static str,
        literal: &'static str,
        sigma_literal: Option<&'static str>,
    ) -> Self {
        Self {
            symbol,
            source,
            literal,
            sigma_literal,
        }
    }

    /// Parse the value literal.
    pub fn value(&self) -> NumericResult<FloatingDecimal> {
        self.literal.parse()
    }

    /// Parse the one-standard-deviation uncertainty, if one is published.
    pub fn sigma(&self) -> NumericResult<Option<FloatingDecimal>> {
        self.sigma_literal.map(str::parse).transpose()
    }

    /// Human-readable label, e.g. "G (CODATA 2022)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.symbol, self.source)
    }
}

// ============================================================================
// Fundamental Inputs
// ============================================================================

/// Speed of light in vacuum, m/s. Exact by the SI definition of the metre.
pub const SPEED_OF_LIGHT: PhysicalConstant =
    PhysicalConstant::new("c", "SI definition", "299792458", None);

/// π to 50 decimal digits.
///
/// Supplied as a fixed literal rather than computed, to anchor transcendental
/// precision above the working precision. Treated as a fixed domain constant;
/// changing it changes the canonical regression values.
pub const PI: PhysicalConstant = PhysicalConstant::new(
    "pi",
    "literal",
    "3.1415926535897932384626433832795028841971693993751",
    None,
);

// ============================================================================
// CODATA Reference Datasets
// ============================================================================

/// Gravitational constant, CODATA 1986 recommendation.
pub const G_CODATA_1986: PhysicalConstant =
    PhysicalConstant::new("G", "CODATA 1986", "6.67259e-11", Some("0.00085e-11"));

/// Gravitational constant, CODATA 1998 recommendation.
pub const G_CODATA_1998: PhysicalConstant =
    PhysicalConstant::new("G", "CODATA 1998", "6.673e-11", Some("0.010e-11"));

/// Gravitational constant, CODATA 2022 recommendation.
pub const G_CODATA_2022: PhysicalConstant =
    PhysicalConstant::new("G", "CODATA 2022", "6.67430e-11", Some("0.00015e-11"));

/// Inverse fine-structure constant, CODATA 2022 recommendation.
pub const ALPHA_INV_CODATA_2022: PhysicalConstant =
    PhysicalConstant::new("1/alpha", "CODATA 2022", "137.035999177", Some("0.000000021"));

/// Planck constant, CODATA 2022. Exact by the SI definition of the kilogram,
/// so no uncertainty is published.
pub const H_CODATA_2022: PhysicalConstant =
    PhysicalConstant::new("h", "CODATA 2022", "6.62607015e-34", None);

/// The three historical G epochs, oldest first.
pub const G_EPOCHS: [PhysicalConstant; 3] = [G_CODATA_1986, G_CODATA_1998, G_CODATA_2022];
