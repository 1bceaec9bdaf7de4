//! # Derived figures for the insights and profile pages
//!
//! The backend only reports totals. Everything below is derived on the client
//! from [`Summary`] using fixed ratios, so these numbers are **illustrative
//! placeholders**, not measurements, and the pages label them that way:
//!
//! | Figure | Derivation |
//! |--------|-----------|
//! | [`food_split`] | food emission × 0.4 vegetarian / 0.6 non-vegetarian |
//! | [`detailed_food_categories`] | food emission × fixed cuisine shares |
//! | [`seasonal_impact`] | total × 0.35 / 0.25 / 0.40 |
//! | [`GlobalComparison`] | average per order against [`GLOBAL_AVERAGE_KG`] |
//! | [`CostSavings`] | total × [`COST_PER_KG`], split by strategy |
//! | [`goals`] | 80% of current average and total against fixed targets |
//! | [`green_score`] / [`Badge`] | 100 points adjusted by average, veg share and transport share |
//! | [`EnvironmentalImpact`] | trees, car days, phone charges, bulb hours |
//!
//! The profile's [`CarbonRank`] and [`car_miles`] are real arithmetic on the
//! summary and live here because they share the same inputs.

use api::Summary;

/// Average emission of a food delivery order, kg CO₂.
pub const GLOBAL_AVERAGE_KG: f64 = 2.8;

/// Offset cost per kg CO₂, in dollars.
pub const COST_PER_KG: f64 = 0.5;

/// Miles driven by car per kg CO₂.
pub const CAR_MILES_PER_KG: f64 = 2.5;

fn food(summary: &Summary) -> f64 {
    summary.food_emission.unwrap_or(0.0)
}

fn total(summary: &Summary) -> f64 {
    summary.total_emission.unwrap_or(0.0)
}

/// `(label, kg)` pairs for vegetarian versus non-vegetarian food emission.
pub fn food_split(summary: &Summary) -> [(&'static str, f64); 2] {
    [
        ("Vegetarian", food(summary) * 0.4),
        ("Non-Vegetarian", food(summary) * 0.6),
    ]
}

const VEGETARIAN_SHARES: [(&str, f64); 4] = [
    ("Indian", 0.25),
    ("Chinese", 0.15),
    ("Italian", 0.10),
    ("Other", 0.05),
];

const NON_VEGETARIAN_SHARES: [(&str, f64); 4] = [
    ("Chicken", 0.20),
    ("Fish", 0.15),
    ("Red Meat", 0.10),
    ("Other", 0.05),
];

/// `("Vegetarian - Indian", kg)` style rows.
pub fn detailed_food_categories(summary: &Summary) -> Vec<(String, f64)> {
    let food = food(summary);
    VEGETARIAN_SHARES
        .iter()
        .map(|(name, share)| (format!("Vegetarian - {name}"), food * share))
        .chain(
            NON_VEGETARIAN_SHARES
                .iter()
                .map(|(name, share)| (format!("Non-Vegetarian - {name}"), food * share)),
        )
        .collect()
}

/// Share of food emission attributed to vegetarian cuisines, in percent.
fn vegetarian_percentage(summary: &Summary) -> f64 {
    if food(summary) == 0.0 {
        return 0.0;
    }
    VEGETARIAN_SHARES.iter().map(|(_, share)| share).sum::<f64>() * 100.0
}

pub fn seasonal_impact(summary: &Summary) -> [(&'static str, f64); 3] {
    let total = total(summary);
    [
        ("Summer", total * 0.35),
        ("Monsoon", total * 0.25),
        ("Winter", total * 0.40),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalComparison {
    pub user_average: f64,
    pub global_average: f64,
    /// Percent above (positive) or below (negative) the global average.
    pub difference: f64,
}

impl GlobalComparison {
    pub fn from_summary(summary: &Summary) -> Self {
        let user_average = summary.average_emission_per_order.unwrap_or(0.0);
        let difference = if user_average == 0.0 {
            0.0
        } else {
            (user_average - GLOBAL_AVERAGE_KG) / GLOBAL_AVERAGE_KG * 100.0
        };
        Self {
            user_average,
            global_average: GLOBAL_AVERAGE_KG,
            difference,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostSavings {
    pub current: f64,
    pub strategies: [(&'static str, f64); 4],
}

impl CostSavings {
    /// `None` until there is some emission to offset.
    pub fn from_summary(summary: &Summary) -> Option<Self> {
        let total = total(summary);
        if total == 0.0 {
            return None;
        }
        let current = total * COST_PER_KG;
        Some(Self {
            current,
            strategies: [
                ("Switch to Vegetarian", current * 0.3),
                ("Order from Nearby", current * 0.2),
                ("Reduce Packaging", current * 0.1),
                ("Seasonal Choices", current * 0.15),
            ],
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: &'static str,
    pub target: f64,
    pub current: f64,
}

impl Goal {
    pub fn progress(&self) -> f64 {
        self.current / self.target * 100.0
    }
}

pub fn goals(summary: &Summary) -> [Goal; 2] {
    [
        Goal {
            name: "Monthly Reduction",
            target: 2.0,
            current: summary.average_emission_per_order.unwrap_or(0.0) * 0.8,
        },
        Goal {
            name: "Annual Reduction",
            target: 24.0,
            current: total(summary) * 0.8,
        },
    ]
}

/// 0..=100 score; higher is greener.
pub fn green_score(summary: &Summary) -> u32 {
    let mut score: i32 = 100;

    let average = summary.average_emission_per_order.unwrap_or(0.0);
    if average > 3.0 {
        score -= 30;
    } else if average > 2.0 {
        score -= 20;
    } else if average > 1.0 {
        score -= 10;
    }

    let vegetarian = vegetarian_percentage(summary);
    if vegetarian > 70.0 {
        score += 20;
    } else if vegetarian > 50.0 {
        score += 15;
    } else if vegetarian > 30.0 {
        score += 10;
    }

    let total = total(summary);
    if total > 0.0 {
        let transport = summary.transport_emission.unwrap_or(0.0) / total * 100.0;
        if transport < 20.0 {
            score += 15;
        } else if transport < 30.0 {
            score += 10;
        } else if transport < 40.0 {
            score += 5;
        }
    }

    score.clamp(0, 100) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    EcoWarrior,
    GreenChampion,
    EcoFriendly,
    GreenExplorer,
    EcoLearner,
    EcoBeginner,
}

impl Badge {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= 90 => Badge::EcoWarrior,
            s if s >= 80 => Badge::GreenChampion,
            s if s >= 70 => Badge::EcoFriendly,
            s if s >= 60 => Badge::GreenExplorer,
            s if s >= 50 => Badge::EcoLearner,
            _ => Badge::EcoBeginner,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Badge::EcoWarrior => "Eco Warrior",
            Badge::GreenChampion => "Green Champion",
            Badge::EcoFriendly => "Eco Friendly",
            Badge::GreenExplorer => "Green Explorer",
            Badge::EcoLearner => "Eco Learner",
            Badge::EcoBeginner => "Eco Beginner",
        }
    }

    /// Modifier for the `badge--*` CSS class.
    pub fn tone(&self) -> &'static str {
        match self {
            Badge::EcoWarrior | Badge::GreenChampion => "green",
            Badge::EcoFriendly | Badge::GreenExplorer => "teal",
            Badge::EcoLearner | Badge::EcoBeginner => "yellow",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentalImpact {
    pub trees: f64,
    pub car_days: f64,
    pub phone_charges: u64,
    pub bulb_hours: u64,
}

impl EnvironmentalImpact {
    pub fn from_summary(summary: &Summary) -> Option<Self> {
        let total = total(summary);
        if total == 0.0 {
            return None;
        }
        Some(Self {
            // A tree absorbs about 22 kg a year
            trees: total / 22.0,
            // A car emits about 4.6 t a year
            car_days: total / 4600.0 * 365.0,
            phone_charges: (total / 0.05).round() as u64,
            bulb_hours: (total / 0.03).round() as u64,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbonRank {
    CarbonChampion,
    GreenAdvocate,
    ClimateConscious,
    CarbonNovice,
}

impl CarbonRank {
    pub fn title(&self) -> &'static str {
        match self {
            CarbonRank::CarbonChampion => "Carbon Champion",
            CarbonRank::GreenAdvocate => "Green Advocate",
            CarbonRank::ClimateConscious => "Climate Conscious",
            CarbonRank::CarbonNovice => "Carbon Novice",
        }
    }
}

/// Progress against the emission level the user started from.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub baseline: f64,
    pub target: f64,
    /// `None` while there is no baseline to compare against.
    pub percentage: Option<f64>,
}

impl Reduction {
    pub fn from_summary(summary: &Summary) -> Self {
        let total = total(summary);
        let baseline = summary
            .baseline_emission
            .filter(|b| *b != 0.0)
            .unwrap_or(total);
        let percentage = (baseline != 0.0).then(|| (baseline - total) / baseline * 100.0);
        Self {
            baseline,
            target: baseline * 0.5,
            percentage,
        }
    }

    pub fn rank(&self) -> CarbonRank {
        match self.percentage {
            Some(p) if p >= 40.0 => CarbonRank::CarbonChampion,
            Some(p) if p >= 20.0 => CarbonRank::GreenAdvocate,
            Some(p) if p >= 0.0 => CarbonRank::ClimateConscious,
            _ => CarbonRank::CarbonNovice,
        }
    }
}

/// Miles driven by car that emit as much as `summary`'s total, rounded.
pub fn car_miles(summary: &Summary) -> u64 {
    (total(summary) * CAR_MILES_PER_KG).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: f64, transport: f64, food: f64, average: f64) -> Summary {
        Summary {
            total_emission: Some(total),
            transport_emission: Some(transport),
            food_emission: Some(food),
            average_emission_per_order: Some(average),
            ..Default::default()
        }
    }

    #[test]
    fn test_fixed_splits() {
        let s = summary(10.0, 2.0, 5.0, 2.5);
        let [veg, non_veg] = food_split(&s);
        assert_eq!(veg.0, "Vegetarian");
        assert!((veg.1 - 2.0).abs() < 1e-9);
        assert!((non_veg.1 - 3.0).abs() < 1e-9);
        let seasons = seasonal_impact(&s);
        assert!((seasons[0].1 - 3.5).abs() < 1e-9);
        assert!((seasons[2].1 - 4.0).abs() < 1e-9);

        let detailed = detailed_food_categories(&s);
        assert_eq!(detailed.len(), 8);
        assert_eq!(detailed[0].0, "Vegetarian - Indian");
        assert!((detailed[0].1 - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_global_comparison() {
        let cmp = GlobalComparison::from_summary(&summary(0.0, 0.0, 0.0, 4.2));
        assert!((cmp.difference - 50.0).abs() < 1e-9);
        assert_eq!(GlobalComparison::from_summary(&Summary::default()).difference, 0.0);
    }

    #[test]
    fn test_cost_savings() {
        assert!(CostSavings::from_summary(&Summary::default()).is_none());
        let savings = CostSavings::from_summary(&summary(20.0, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(savings.current, 10.0);
        assert_eq!(savings.strategies[0].0, "Switch to Vegetarian");
        assert!((savings.strategies[0].1 - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_goals_progress() {
        let [monthly, annual] = goals(&summary(12.0, 0.0, 0.0, 2.5));
        assert!((monthly.progress() - 100.0).abs() < 1e-9);
        assert!((annual.progress() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_green_score() {
        // avg 2.5 → -20, veg share 55% → +15, transport 15% → +15
        assert_eq!(green_score(&summary(10.0, 1.5, 5.0, 2.5)), 100);
        // avg 3.5 → -30, no food → +0, transport 50% → +0
        assert_eq!(green_score(&summary(10.0, 5.0, 0.0, 3.5)), 70);
        // nothing recorded: no deductions, no bonuses
        assert_eq!(green_score(&Summary::default()), 100);
    }

    #[test]
    fn test_badges() {
        assert_eq!(Badge::for_score(100), Badge::EcoWarrior);
        assert_eq!(Badge::for_score(85).name(), "Green Champion");
        assert_eq!(Badge::for_score(70), Badge::EcoFriendly);
        assert_eq!(Badge::for_score(12), Badge::EcoBeginner);
    }

    #[test]
    fn test_reduction_and_rank() {
        let mut s = summary(6.0, 0.0, 0.0, 0.0);
        s.baseline_emission = Some(12.0);
        let reduction = Reduction::from_summary(&s);
        assert_eq!(reduction.target, 6.0);
        assert_eq!(reduction.rank(), CarbonRank::CarbonChampion);

        s.baseline_emission = Some(5.0);
        assert_eq!(Reduction::from_summary(&s).rank(), CarbonRank::CarbonNovice);

        // No baseline: compared against itself
        s.baseline_emission = None;
        assert_eq!(Reduction::from_summary(&s).rank(), CarbonRank::ClimateConscious);
        assert_eq!(Reduction::from_summary(&Summary::default()).percentage, None);
    }

    #[test]
    fn test_equivalents() {
        let s = summary(4.4, 0.0, 0.0, 0.0);
        assert_eq!(car_miles(&s), 11);
        let impact = EnvironmentalImpact::from_summary(&s).unwrap();
        assert!((impact.trees - 0.2).abs() < 1e-9);
        assert_eq!(impact.phone_charges, 88);
    }
}
