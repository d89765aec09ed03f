//! The five fixture families and their fixed input files.

use std::fmt;

/// The five precompile fixture families, in their fixed conversion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    /// G1 point addition.
    G1Add,
    /// G1 scalar multiplication.
    G1Mul,
    /// G2 point addition.
    G2Add,
    /// G2 scalar multiplication.
    G2Mul,
    /// Multi-term pairing check.
    Pairing,
}

impl FixtureKind {
    /// Every kind, in the order a conversion run processes them.
    pub const ALL: [Self; 5] = [
        Self::G1Add,
        Self::G1Mul,
        Self::G2Add,
        Self::G2Mul,
        Self::Pairing,
    ];

    /// Name of the CSV file holding this kind's vectors.
    #[must_use]
    pub const fn csv_file_name(self) -> &'static str {
        match self {
            Self::G1Add => "g1_add.csv",
            Self::G1Mul => "g1_mul.csv",
            Self::G2Add => "g2_add.csv",
            Self::G2Mul => "g2_mul.csv",
            Self::Pairing => "pairing.csv",
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::G1Add => "g1_add",
            Self::G1Mul => "g1_mul",
            Self::G2Add => "g2_add",
            Self::G2Mul => "g2_mul",
            Self::Pairing => "pairing",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::FixtureKind;

    #[test]
    fn conversion_order_is_fixed() {
        let names: Vec<String> = FixtureKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["g1_add", "g1_mul", "g2_add", "g2_mul", "pairing"]);
    }

    #[test]
    fn csv_file_names() {
        assert_eq!(FixtureKind::G1Add.csv_file_name(), "g1_add.csv");
        assert_eq!(FixtureKind::Pairing.csv_file_name(), "pairing.csv");
    }
}
