use core::str::FromStr;

use serde::{Deserialize, Serialize};

use vendsim_core::{DomainError, DomainResult, ValueObject};

/// Shelf life of every juice, in days.
pub const JUICE_EXPIRATION_DAYS: i32 = 7;

/// Shelf life of every bottled water, in days.
pub const WATER_EXPIRATION_DAYS: i32 = 365;

pub const DEFAULT_FRUIT_TYPE: &str = "Mixed";

pub const DEFAULT_CAFFEINE_MG: u32 = 80;

/// Discriminant of a beverage variant.
///
/// Read-only and fixed at construction; filtering and counting compare tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BeverageKind {
    Generic,
    Juice,
    Cola,
    EnergyDrink,
    Water,
}

impl BeverageKind {
    pub const ALL: [BeverageKind; 5] = [
        BeverageKind::Generic,
        BeverageKind::Juice,
        BeverageKind::Cola,
        BeverageKind::EnergyDrink,
        BeverageKind::Water,
    ];

    /// Display name used in summaries and descriptions.
    pub fn name(self) -> &'static str {
        match self {
            BeverageKind::Generic => "Drink",
            BeverageKind::Juice => "Juice",
            BeverageKind::Cola => "Cola",
            BeverageKind::EnergyDrink => "EnergyDrink",
            BeverageKind::Water => "Water",
        }
    }
}

impl ValueObject for BeverageKind {}

impl core::fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Container a Cola is sold in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColaContainer {
    Can = 0,
    Bottle = 1,
}

/// Volume and shelf life implied by a Cola container.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub volume: u32,
    pub expiration: i32,
}

impl ValueObject for ContainerSpec {}

/// Container lookup table, indexed by `ColaContainer` discriminant.
const CONTAINER_SPECS: [(&str, ColaContainer, ContainerSpec); 2] = [
    ("can", ColaContainer::Can, ContainerSpec { volume: 330, expiration: 60 }),
    ("bottle", ColaContainer::Bottle, ContainerSpec { volume: 500, expiration: 30 }),
];

impl ColaContainer {
    pub fn spec(self) -> ContainerSpec {
        CONTAINER_SPECS[self as usize].2
    }

    pub fn as_str(self) -> &'static str {
        CONTAINER_SPECS[self as usize].0
    }
}

impl core::fmt::Display for ColaContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColaContainer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CONTAINER_SPECS
            .iter()
            .find(|(name, _, _)| *name == s)
            .map(|(_, container, _)| *container)
            .ok_or_else(|| DomainError::invalid_container_kind(s))
    }
}

/// Variant-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    Generic,
    Juice { fruit_type: String },
    Cola { container: ColaContainer },
    EnergyDrink { caffeine_mg: u32, sugar_free: bool },
    Water { sparkling: bool },
}

impl Variant {
    pub fn kind(&self) -> BeverageKind {
        match self {
            Variant::Generic => BeverageKind::Generic,
            Variant::Juice { .. } => BeverageKind::Juice,
            Variant::Cola { .. } => BeverageKind::Cola,
            Variant::EnergyDrink { .. } => BeverageKind::EnergyDrink,
            Variant::Water { .. } => BeverageKind::Water,
        }
    }
}

/// Result of aging a beverage by one day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AgeOutcome {
    /// Remaining life went down by one.
    Aged { remaining_life: i32 },
    /// Remaining life was already at or below zero; nothing changed.
    AlreadyExpired,
}

/// A perishable beverage.
///
/// `volume` never changes after construction. `remaining_life` only moves
/// through [`Beverage::age`], which never takes it below zero.
///
/// Deserialization only accepts states the constructors and aging can reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BeverageRecord")]
pub struct Beverage {
    volume: u32,
    remaining_life: i32,
    #[serde(flatten)]
    variant: Variant,
}

/// Wire shape of a beverage, checked before it becomes a [`Beverage`].
#[derive(Debug, Deserialize)]
struct BeverageRecord {
    volume: u32,
    remaining_life: i32,
    #[serde(flatten)]
    variant: Variant,
}

impl TryFrom<BeverageRecord> for Beverage {
    type Error = DomainError;

    fn try_from(record: BeverageRecord) -> Result<Self, Self::Error> {
        let kind = record.variant.kind();
        let max_life = match &record.variant {
            Variant::Generic | Variant::EnergyDrink { .. } => None,
            Variant::Juice { .. } => Some(JUICE_EXPIRATION_DAYS),
            Variant::Water { .. } => Some(WATER_EXPIRATION_DAYS),
            Variant::Cola { container } => {
                let spec = container.spec();
                if record.volume != spec.volume {
                    return Err(DomainError::validation(format!(
                        "cola in a {container} holds {}mL, not {}mL",
                        spec.volume, record.volume
                    )));
                }
                Some(spec.expiration)
            }
        };

        if let Some(max) = max_life {
            if !(0..=max).contains(&record.remaining_life) {
                return Err(DomainError::validation(format!(
                    "{kind} remaining life must be within 0..={max}, got {}",
                    record.remaining_life
                )));
            }
        }

        Ok(Self::with_variant(record.volume, record.remaining_life, record.variant))
    }
}

impl Beverage {
    fn with_variant(volume: u32, remaining_life: i32, variant: Variant) -> Self {
        Self {
            volume,
            remaining_life,
            variant,
        }
    }

    /// A plain drink with caller-chosen volume and shelf life.
    pub fn generic(volume: u32, expiration: i32) -> Self {
        Self::with_variant(volume, expiration, Variant::Generic)
    }

    /// A mixed-fruit juice (shelf life fixed to 7 days).
    pub fn juice(volume: u32) -> Self {
        Self::juice_with(volume, DEFAULT_FRUIT_TYPE)
    }

    pub fn juice_with(volume: u32, fruit_type: impl Into<String>) -> Self {
        Self::with_variant(
            volume,
            JUICE_EXPIRATION_DAYS,
            Variant::Juice {
                fruit_type: fruit_type.into(),
            },
        )
    }

    /// A Cola in the named container kind (`"can"` or `"bottle"`).
    ///
    /// Any other kind fails with [`DomainError::InvalidContainerKind`].
    pub fn cola(kind: &str) -> DomainResult<Self> {
        Ok(Self::cola_in(kind.parse()?))
    }

    pub fn cola_in(container: ColaContainer) -> Self {
        let spec = container.spec();
        Self::with_variant(spec.volume, spec.expiration, Variant::Cola { container })
    }

    /// A regular energy drink with 80mg of caffeine.
    pub fn energy_drink(volume: u32, expiration: i32) -> Self {
        Self::energy_drink_with(volume, expiration, DEFAULT_CAFFEINE_MG, false)
    }

    pub fn energy_drink_with(
        volume: u32,
        expiration: i32,
        caffeine_mg: u32,
        sugar_free: bool,
    ) -> Self {
        Self::with_variant(
            volume,
            expiration,
            Variant::EnergyDrink {
                caffeine_mg,
                sugar_free,
            },
        )
    }

    /// Still water (shelf life fixed to 365 days).
    pub fn water(volume: u32) -> Self {
        Self::water_with(volume, false)
    }

    pub fn water_with(volume: u32, sparkling: bool) -> Self {
        Self::with_variant(volume, WATER_EXPIRATION_DAYS, Variant::Water { sparkling })
    }

    pub fn kind(&self) -> BeverageKind {
        self.variant.kind()
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Volume in milliliters.
    pub fn volume(&self) -> u32 {
        self.volume
    }

    /// Days until expiry.
    pub fn remaining_life(&self) -> i32 {
        self.remaining_life
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_life <= 0
    }

    /// Advance this beverage by one day.
    ///
    /// Once remaining life reaches zero it stays there; each further call
    /// emits a warning and reports [`AgeOutcome::AlreadyExpired`].
    pub fn age(&mut self) -> AgeOutcome {
        if self.remaining_life > 0 {
            self.remaining_life -= 1;
            AgeOutcome::Aged {
                remaining_life: self.remaining_life,
            }
        } else {
            tracing::warn!(kind = %self.kind(), "{} has already expired", self.kind());
            AgeOutcome::AlreadyExpired
        }
    }

    pub fn fruit_type(&self) -> Option<&str> {
        match &self.variant {
            Variant::Juice { fruit_type } => Some(fruit_type),
            _ => None,
        }
    }

    pub fn cola_container(&self) -> Option<ColaContainer> {
        match self.variant {
            Variant::Cola { container } => Some(container),
            _ => None,
        }
    }

    pub fn caffeine_mg(&self) -> Option<u32> {
        match self.variant {
            Variant::EnergyDrink { caffeine_mg, .. } => Some(caffeine_mg),
            _ => None,
        }
    }

    pub fn is_sugar_free(&self) -> Option<bool> {
        match self.variant {
            Variant::EnergyDrink { sugar_free, .. } => Some(sugar_free),
            _ => None,
        }
    }

    pub fn is_sparkling(&self) -> Option<bool> {
        match self.variant {
            Variant::Water { sparkling } => Some(sparkling),
            _ => None,
        }
    }

    /// Human-readable one-line description.
    pub fn describe(&self) -> String {
        let (volume, days) = (self.volume, self.remaining_life);
        match &self.variant {
            Variant::Generic => format!("Drink: {volume}mL, expires in {days} days"),
            Variant::Juice { fruit_type } => {
                format!("Juice ({fruit_type}): {volume}mL, expires in {days} days")
            }
            Variant::Cola { container } => {
                format!("Cola: {volume}mL, expires in {days} days, in a {container}")
            }
            Variant::EnergyDrink {
                caffeine_mg,
                sugar_free,
            } => {
                let sugar = if *sugar_free { "Sugar-Free" } else { "Regular" };
                format!(
                    "EnergyDrink ({sugar}): {volume}mL, {caffeine_mg}mg caffeine, \
                     expires in {days} days"
                )
            }
            Variant::Water { sparkling } => {
                let style = if *sparkling { "Sparkling" } else { "Still" };
                format!("Water ({style}): {volume}mL, expires in {days} days")
            }
        }
    }
}

impl core::fmt::Display for Beverage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn juice_has_fixed_shelf_life_and_given_volume() {
        let juice = Beverage::juice_with(1000, "Orange");
        assert_eq!(juice.remaining_life(), 7);
        assert_eq!(juice.volume(), 1000);
        assert_eq!(juice.fruit_type(), Some("Orange"));
        assert_eq!(Beverage::juice(250).fruit_type(), Some("Mixed"));
    }

    #[test]
    fn cola_derives_volume_and_shelf_life_from_container() {
        let can = Beverage::cola("can").unwrap();
        assert_eq!((can.volume(), can.remaining_life()), (330, 60));
        assert_eq!(can.cola_container(), Some(ColaContainer::Can));

        let bottle = Beverage::cola("bottle").unwrap();
        assert_eq!((bottle.volume(), bottle.remaining_life()), (500, 30));
    }

    #[test]
    fn cola_rejects_unknown_container_kind() {
        let err = Beverage::cola("large").unwrap_err();
        assert_eq!(err, DomainError::InvalidContainerKind("large".to_string()));

        // Matching is exact.
        assert!(Beverage::cola("Can").is_err());
    }

    #[test]
    fn energy_drink_defaults() {
        let drink = Beverage::energy_drink(250, 30);
        assert_eq!(drink.caffeine_mg(), Some(80));
        assert_eq!(drink.is_sugar_free(), Some(false));
        assert_eq!(drink.remaining_life(), 30);
    }

    #[test]
    fn water_defaults_to_still_with_a_year_of_shelf_life() {
        let water = Beverage::water(500);
        assert_eq!(water.remaining_life(), 365);
        assert_eq!(water.is_sparkling(), Some(false));
        assert_eq!(Beverage::water_with(500, true).is_sparkling(), Some(true));
    }

    #[test]
    fn attribute_accessors_are_variant_specific() {
        let water = Beverage::water(500);
        assert_eq!(water.fruit_type(), None);
        assert_eq!(water.cola_container(), None);
        assert_eq!(water.caffeine_mg(), None);
        assert_eq!(Beverage::generic(1, 1).is_sparkling(), None);
    }

    #[test]
    fn aging_stops_at_zero() {
        let mut drink = Beverage::generic(350, 2);
        assert_eq!(drink.age(), AgeOutcome::Aged { remaining_life: 1 });
        assert!(!drink.is_expired());
        assert_eq!(drink.age(), AgeOutcome::Aged { remaining_life: 0 });
        assert!(drink.is_expired());
        assert_eq!(drink.age(), AgeOutcome::AlreadyExpired);
        assert_eq!(drink.remaining_life(), 0);
    }

    #[test]
    fn negative_shelf_life_is_expired_and_left_alone() {
        let mut drink = Beverage::generic(100, -3);
        assert!(drink.is_expired());
        assert_eq!(drink.age(), AgeOutcome::AlreadyExpired);
        assert_eq!(drink.remaining_life(), -3);
    }

    #[test]
    fn descriptions_carry_the_distinguishing_attribute() {
        assert_eq!(Beverage::generic(500, 10).describe(), "Drink: 500mL, expires in 10 days");
        assert_eq!(
            Beverage::juice_with(750, "Apple").describe(),
            "Juice (Apple): 750mL, expires in 7 days"
        );
        assert_eq!(
            Beverage::cola_in(ColaContainer::Bottle).describe(),
            "Cola: 500mL, expires in 30 days, in a bottle"
        );
        assert_eq!(
            Beverage::energy_drink_with(250, 30, 150, true).to_string(),
            "EnergyDrink (Sugar-Free): 250mL, 150mg caffeine, expires in 30 days"
        );
        assert_eq!(
            Beverage::water_with(500, true).to_string(),
            "Water (Sparkling): 500mL, expires in 365 days"
        );
    }

    #[test]
    fn kind_tags_follow_the_variant() {
        assert_eq!(Beverage::generic(1, 1).kind(), BeverageKind::Generic);
        assert_eq!(Beverage::juice(1).kind(), BeverageKind::Juice);
        assert_eq!(Beverage::cola_in(ColaContainer::Can).kind(), BeverageKind::Cola);
        assert_eq!(Beverage::energy_drink(1, 1).kind(), BeverageKind::EnergyDrink);
        assert_eq!(Beverage::water(1).kind(), BeverageKind::Water);
    }

    #[test]
    fn serializes_with_a_flat_kind_tag() {
        let json = serde_json::to_value(Beverage::cola_in(ColaContainer::Can)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "volume": 330,
                "remaining_life": 60,
                "kind": "cola",
                "container": "can",
            })
        );
    }

    #[test]
    fn default_variants_describe_their_plain_form() {
        assert_eq!(
            Beverage::juice(330).describe(),
            "Juice (Mixed): 330mL, expires in 7 days"
        );
        assert_eq!(
            Beverage::energy_drink(500, 45).describe(),
            "EnergyDrink (Regular): 500mL, 80mg caffeine, expires in 45 days"
        );
        assert_eq!(
            Beverage::water(1000).describe(),
            "Water (Still): 1000mL, expires in 365 days"
        );
    }

    #[test]
    fn deserializes_reachable_states() {
        let mut juice = Beverage::juice_with(500, "Orange");
        juice.age();
        let json = serde_json::to_string(&juice).unwrap();
        assert_eq!(serde_json::from_str::<Beverage>(&json).unwrap(), juice);

        let cola: Beverage = serde_json::from_str(
            r#"{"volume":500,"remaining_life":0,"kind":"cola","container":"bottle"}"#,
        )
        .unwrap();
        assert_eq!(cola.cola_container(), Some(ColaContainer::Bottle));

        let generic: Beverage =
            serde_json::from_str(r#"{"volume":100,"remaining_life":-3,"kind":"generic"}"#)
                .unwrap();
        assert!(generic.is_expired());
    }

    #[test]
    fn cola_with_volume_off_its_container_is_rejected() {
        let err = serde_json::from_str::<Beverage>(
            r#"{"volume":1,"remaining_life":60,"kind":"cola","container":"can"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("cola in a can holds 330mL"));
    }

    #[test]
    fn shelf_life_beyond_the_fixed_maximum_is_rejected() {
        for json in [
            r#"{"volume":330,"remaining_life":9999,"kind":"cola","container":"can"}"#,
            r#"{"volume":500,"remaining_life":-40,"kind":"juice","fruit_type":"Apple"}"#,
            r#"{"volume":500,"remaining_life":8,"kind":"juice","fruit_type":"Apple"}"#,
            r#"{"volume":500,"remaining_life":366,"kind":"water","sparkling":false}"#,
        ] {
            let err = serde_json::from_str::<Beverage>(json).unwrap_err();
            assert!(err.to_string().contains("remaining life must be within"), "{json}: {err}");
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_beverage() -> impl Strategy<Value = Beverage> {
            prop_oneof![
                (1u32..5000, -10i32..400).prop_map(|(v, e)| Beverage::generic(v, e)),
                (1u32..5000, "[A-Za-z]{1,12}").prop_map(|(v, f)| Beverage::juice_with(v, f)),
                prop_oneof![Just(ColaContainer::Can), Just(ColaContainer::Bottle)]
                    .prop_map(Beverage::cola_in),
                (1u32..5000, -10i32..400, 0u32..500, any::<bool>())
                    .prop_map(|(v, e, c, s)| Beverage::energy_drink_with(v, e, c, s)),
                (1u32..5000, any::<bool>()).prop_map(|(v, s)| Beverage::water_with(v, s)),
            ]
        }

        proptest! {
            /// Property: expired exactly when remaining life is at or below zero.
            #[test]
            fn expired_iff_no_life_left(mut beverage in arbitrary_beverage(), days in 0usize..500) {
                for _ in 0..days {
                    beverage.age();
                    prop_assert_eq!(beverage.is_expired(), beverage.remaining_life() <= 0);
                }
            }

            /// Property: aging never pushes a fresh beverage below zero.
            #[test]
            fn aging_has_a_floor(mut beverage in arbitrary_beverage(), days in 0usize..500) {
                let start = beverage.remaining_life();
                for _ in 0..days {
                    beverage.age();
                }
                let expected = if start > 0 { (start - days as i32).max(0) } else { start };
                prop_assert_eq!(beverage.remaining_life(), expected);
            }

            /// Property: aging never touches volume or variant.
            #[test]
            fn aging_preserves_identity_fields(mut beverage in arbitrary_beverage()) {
                let before = beverage.clone();
                beverage.age();
                prop_assert_eq!(beverage.volume(), before.volume());
                prop_assert_eq!(beverage.variant(), before.variant());
            }
        }
    }
}
