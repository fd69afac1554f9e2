use super::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    // Inflow
    Salary,
    Business,
    Investment,
    Loan,
    // Outflow
    Groceries,
    Fuel,
    FoodDrink,
    CarBike,
    Taxi,
    Clothes,
    Shopping,
    Entertainment,
    Electricity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Business => "Business",
            Self::Investment => "Investment",
            Self::Loan => "Loan",
            Self::Groceries => "Groceries",
            Self::Fuel => "Fuel",
            Self::FoodDrink => "Food/Drink",
            Self::CarBike => "Car/Bike",
            Self::Taxi => "Taxi",
            Self::Clothes => "Clothes",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Electricity => "Electricity",
        }
    }

    /// The direction whose option list contains this category.
    pub fn direction(&self) -> Direction {
        match self {
            Self::Salary | Self::Business | Self::Investment | Self::Loan => Direction::In,
            _ => Direction::Out,
        }
    }

    /// Find a category by name (case-insensitive) across both directions.
    pub fn find_by_name(name: &str) -> Option<Category> {
        let lower = name.trim().to_lowercase();
        Direction::all()
            .iter()
            .flat_map(|d| d.categories())
            .find(|c| c.as_str().to_lowercase() == lower)
            .copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
