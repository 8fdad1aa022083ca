//! Character state: species, species-scoped attitude, mood and personality.
//!
//! The attitude domain depends on the species, so the two are carried
//! together as one tagged value. An invalid pairing (a dog with a tsundere
//! attitude) is unrepresentable; the only remap needed at runtime is the
//! explicit species change, which falls back to `friendly`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    /// Species choice from the last onboarding answer: 猫 anywhere in the
    /// text picks the cat, everything else the dog.
    pub fn from_answer(answer: &str) -> Self {
        if answer.contains('猫') {
            Species::Cat
        } else {
            Species::Dog
        }
    }

    pub fn label_ja(self) -> &'static str {
        match self {
            Species::Cat => "猫",
            Species::Dog => "犬",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatAttitude {
    Friendly,
    Tsundere,
    Aloof,
    Helpful,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogAttitude {
    Friendly,
    Sympathetic,
    Energetic,
    Helpful,
}

/// Behavioral stance, scoped to the species it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "species", content = "attitude", rename_all = "lowercase")]
pub enum Attitude {
    Cat(CatAttitude),
    Dog(DogAttitude),
}

impl Attitude {
    pub fn friendly_for(species: Species) -> Self {
        match species {
            Species::Cat => Attitude::Cat(CatAttitude::Friendly),
            Species::Dog => Attitude::Dog(DogAttitude::Friendly),
        }
    }

    pub fn species(self) -> Species {
        match self {
            Attitude::Cat(_) => Species::Cat,
            Attitude::Dog(_) => Species::Dog,
        }
    }

    /// Display label for the status badge.
    pub fn label_ja(self) -> &'static str {
        match self {
            Attitude::Cat(CatAttitude::Friendly) | Attitude::Dog(DogAttitude::Friendly) => {
                "フレンドリー"
            }
            Attitude::Cat(CatAttitude::Tsundere) => "ツンデレ",
            Attitude::Cat(CatAttitude::Aloof) => "クール",
            Attitude::Dog(DogAttitude::Sympathetic) => "共感的",
            Attitude::Dog(DogAttitude::Energetic) => "元気",
            Attitude::Cat(CatAttitude::Helpful) | Attitude::Dog(DogAttitude::Helpful) => {
                "お世話好き"
            }
        }
    }
}

/// Emotional display state, independent of attitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Neutral,
}

/// Descriptive trait set at onboarding; it flavors the setup summary but
/// does not feed the response tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Energetic,
    Calm,
    Friendly,
}

impl Personality {
    /// Personality from the daily-rhythm onboarding answer: morning people
    /// get the energetic trait, night owls the calm one.
    pub fn from_rhythm_answer(answer: &str) -> Self {
        if answer.contains('朝') {
            Personality::Energetic
        } else if answer.contains('夜') {
            Personality::Calm
        } else {
            Personality::Friendly
        }
    }

    pub fn label_ja(self) -> &'static str {
        match self {
            Personality::Energetic => "元気",
            Personality::Calm => "落ち着いた",
            Personality::Friendly => "フレンドリーな",
        }
    }
}

/// The mutable character state owned by one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterState {
    attitude: Attitude,
    mood: Mood,
    personality: Personality,
}

impl CharacterState {
    /// Fresh character straight out of onboarding: friendly and happy.
    pub fn new(species: Species, personality: Personality) -> Self {
        Self {
            attitude: Attitude::friendly_for(species),
            mood: Mood::Happy,
            personality,
        }
    }

    pub fn species(&self) -> Species {
        self.attitude.species()
    }

    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// The attitude value carries its species; assigning one from the other
    /// species is a species change as well.
    pub fn set_attitude(&mut self, attitude: Attitude) {
        self.attitude = attitude;
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// Explicit species change. The attitude domain changes with the
    /// species, so the attitude remaps to the new species' friendly.
    pub fn set_species(&mut self, species: Species) {
        if self.species() != species {
            self.attitude = Attitude::friendly_for(species);
        }
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new(Species::Cat, Personality::Friendly)
    }
}
