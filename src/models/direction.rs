use super::Category;

/// Whether a transaction adds to (`In`) or takes from (`Out`) the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    In,
    Out,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "Cash IN",
            Self::Out => "Cash OUT",
        }
    }

    /// Accepts `in`/`out` as well as the display labels, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" | "cash in" | "+" => Some(Self::In),
            "out" | "cash out" | "-" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn all() -> &'static [Direction] {
        &[Self::In, Self::Out]
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }

    /// The category options offered for this direction, in display order.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::In => &[
                Category::Salary,
                Category::Business,
                Category::Investment,
                Category::Loan,
            ],
            Self::Out => &[
                Category::Groceries,
                Category::Fuel,
                Category::FoodDrink,
                Category::CarBike,
                Category::Taxi,
                Category::Clothes,
                Category::Shopping,
                Category::Entertainment,
                Category::Electricity,
            ],
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
