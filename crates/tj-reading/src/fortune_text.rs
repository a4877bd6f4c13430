//! Narrative text for a scored fortune hand.
//!
//! Each section draws from a pool chosen by the calculation's labels, then
//! picks one sentence at random. Special combinations replace the opening
//! and closing with fixed sentences.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tj_deck::{FortuneHand, RandomSource};
use tj_fortune::{
    ComboTag, Dimensions, EnergyFlow, Environment, FortuneCalculation, FortuneLevel, Horizon,
    Relationship, Trend, VariableImpact,
};

use crate::template::{pick, pick_filled};

/// The text of a fortune reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneReading {
    /// Ids of the four cards, in category order.
    pub card_ids: Vec<String>,
    /// Level the reading was written for.
    pub level: FortuneLevel,
    /// Opening sentence.
    pub opening: String,
    /// Analysis paragraph.
    pub analysis: String,
    /// Advice, in generation order. Never empty.
    pub advice: Vec<String>,
    /// Closing sentence.
    pub closing: String,
    /// The four qualitative labels.
    pub dimensions: Dimensions,
    /// Most frequent keywords.
    pub key_themes: Vec<String>,
    /// Special combinations the hand completes.
    pub combinations: Vec<ComboTag>,
}

const OPENING_OVERRIDES: [(ComboTag, &str); 4] = [
    (
        ComboTag::Rebirth,
        "From the deepest trough, you can already see the first light of rebirth.",
    ),
    (
        ComboTag::Crisis,
        "You stand somewhere truly dangerous, yet the danger hides the seed of a turn.",
    ),
    (
        ComboTag::TurningPoint,
        "This is a decisive turning point; the choice you make now sets your direction.",
    ),
    (
        ComboTag::EnergyPeak,
        "You are at the peak of your energy, the best moment to show what you can do.",
    ),
];

const CLOSING_OVERRIDES: [(ComboTag, &str); 2] = [
    (
        ComboTag::TurningPoint,
        "This is a decisive turning point; your choice will set the direction ahead, so weigh it well.",
    ),
    (
        ComboTag::Rebirth,
        "Out of the low point comes a chance to be reborn; what lies ahead is a journey of starting over.",
    ),
];

fn openings(level: FortuneLevel) -> &'static [&'static str] {
    match level {
        FortuneLevel::Excellent => &[
            "Right now you are in a stage overflowing with energy.",
            "What you have at hand is enough to carry you to a higher level.",
            "This is a moment full of possibility.",
            "The cards show you standing at a favorable starting point.",
            "Energy is flowing freely; this is the time for important moves.",
        ],
        FortuneLevel::Good => &[
            "Overall, your fortune is rising steadily.",
            "There are challenges, but you have the resources to meet them.",
            "Now is a good time to act.",
            "Taken as a whole, you are on an upward path.",
            "Things are not perfect, but they are good enough to support your goals.",
        ],
        FortuneLevel::Fair => &[
            "You are in a period of transition that calls for careful watching.",
            "Things are fairly calm, but change is stirring underneath.",
            "This is a stage that asks for patience.",
            "The cards show you passing through an in-between time.",
            "Energy flows evenly, but keep an eye on the small shifts.",
        ],
        FortuneLevel::Poor => &[
            "You are facing some difficulties and need to tread carefully.",
            "Your surroundings are not on your side right now; adjust your approach.",
            "This is a moment that tests your resilience.",
            "The cards show a stage that calls for adjustment.",
            "Energy is blocked; it is time to rethink your direction.",
        ],
        FortuneLevel::Dire => &[
            "You are in an extremely demanding stage.",
            "The situation is severe, yet it may also be where the turn begins.",
            "This is the moment that most asks you to hold on.",
            "The cards show you facing a major test.",
            "Energy is at its lowest, which also means a turn is close.",
        ],
    }
}

fn energy_lines(flow: EnergyFlow) -> &'static [&'static str] {
    match flow {
        EnergyFlow::Abundant => &[
            "{sky} shows your energy running high; that force will carry you forward.",
            "Judging by {sky}, you have enough energy to meet whatever comes.",
            "The energy {sky} brings is strong, well suited to launching important plans.",
        ],
        EnergyFlow::Steady => &[
            "{sky} shows your energy holding steady, a base you can keep building on.",
            "Judging by {sky}, your energy flows evenly; move forward step by step.",
            "The energy {sky} brings is not intense, but it is dependable.",
        ],
        EnergyFlow::Weak => &[
            "{sky} shows your energy running low; recover before you act.",
            "Judging by {sky}, you lack the energy for large undertakings right now.",
            "The energy {sky} brings is faint; this is a time to rest and gather strength.",
        ],
        EnergyFlow::Volatile => &[
            "{sky} shows your energy swinging widely; find a steady rhythm.",
            "Judging by {sky}, your energy is unsettled and needs balancing.",
            "The energy {sky} brings rises and falls; stay flexible.",
        ],
    }
}

fn environment_lines(environment: Environment) -> &'static [&'static str] {
    match environment {
        Environment::Favorable => &[
            "In the {earth}, conditions favor you; make full use of what is there.",
            "The {earth} gives you good ground to stand on; this is a good time to act.",
            "Judging by the {earth}, your surroundings are friendly and ready for your plans.",
        ],
        Environment::Neutral => &[
            "In the {earth}, conditions are neutral; you will have to make your own openings.",
            "The {earth} neither helps nor hinders much; the outcome rests on your choices.",
            "Judging by the {earth}, your surroundings are neutral and your actions decide the result.",
        ],
        Environment::Challenging => &[
            "In the {earth}, you face real challenges and must proceed with care.",
            "The {earth} sets a demanding stage, a moment that tests your abilities.",
            "Judging by the {earth}, your surroundings are unfriendly; change your approach.",
        ],
    }
}

fn relationship_lines(relationship: Relationship) -> &'static [&'static str] {
    match relationship {
        Relationship::Harmonious => &[
            "As the {human}, your place among others is harmonious and will bring you support.",
            "The role of the {human} puts you in a favorable position with the people around you.",
            "Judging by the {human}, your relationships are in a harmonious state.",
        ],
        Relationship::Balanced => &[
            "As the {human}, your place among others is fairly balanced; keep it that way.",
            "The role of the {human} leaves you in a balanced position with the people around you.",
            "Judging by the {human}, your relationships need to stay in balance.",
        ],
        Relationship::Tense => &[
            "As the {human}, your place among others is strained; change how you engage.",
            "The role of the {human} brings some friction into your relationships.",
            "Judging by the {human}, your relationships need to be readjusted.",
        ],
    }
}

fn variable_lines(impact: VariableImpact, favorable: bool) -> &'static [&'static str] {
    match (impact, favorable) {
        (VariableImpact::Major, true) => &[
            "The {variable} will have a major effect, a decisive turn in your favor; be ready for it.",
            "Watch the {variable} closely; its influence is great and it will change everything.",
            "The {variable} is the key factor here, and it opens new possibilities.",
        ],
        (VariableImpact::Major, false) => &[
            "The {variable} will have a major effect, a severe test; prepare thoroughly.",
            "Watch the {variable} closely; its influence is great and it will hit hard.",
            "The {variable} is the key factor here, and it brings serious challenges.",
        ],
        (VariableImpact::Moderate, true) => &[
            "The {variable} has a moderate effect and offers you some openings.",
            "The {variable} carries moderate weight; seize the chance it gives.",
            "Judging by the {variable}, this factor will have a somewhat positive effect.",
        ],
        (VariableImpact::Moderate, false) => &[
            "The {variable} has a moderate effect and brings some challenges.",
            "The {variable} carries moderate weight; handle it with care.",
            "Judging by the {variable}, this factor will have a somewhat negative effect.",
        ],
        (VariableImpact::Minor, true) => &[
            "The {variable} has only a slight effect and may bring a small pleasant surprise.",
            "The {variable} does not weigh much, but it still means something.",
            "Judging by the {variable}, this factor is slight and will not stir things much.",
        ],
        (VariableImpact::Minor, false) => &[
            "The {variable} has only a slight effect and may bring a small setback.",
            "The {variable} does not weigh much, but do not ignore it either.",
            "Judging by the {variable}, this factor is slight and will not stir things much.",
        ],
    }
}

fn combination_lines(tag: ComboTag) -> &'static [&'static str] {
    match tag {
        ComboTag::ExtremeConvergence => &[
            "This is an extreme combination; every factor points the same way and its force is magnified.",
            "Extreme cards together mean a powerful current that will bring deep change.",
            "When extremes converge they amplify each other into a force you cannot ignore.",
        ],
        ComboTag::EnergyPeak => &[
            "You are at an energy peak, the best moment to show influence and leadership.",
            "Energy, setting and role have all peaked; a perfect moment to show your strength.",
            "Everything points to a peak of energy; use this power well.",
        ],
        ComboTag::TurningPoint => &[
            "This is a key turning point; your choice decides what comes next.",
            "The moment of turning has come; the shadows of the past and the possibilities ahead appear together.",
            "You stand at a turning point in your life, and every choice will reach far.",
        ],
        ComboTag::Crisis => &[
            "Danger lies on every side, yet the crisis hides a turn.",
            "Several crises arrive at once, the most dangerous moment and the one most likely to break through.",
            "A crisis on all fronts tests your resilience, and it may bring an unexpected turn.",
        ],
        ComboTag::Rebirth => &[
            "From the lowest trough you glimpse rebirth, a chance to begin again.",
            "In the coldest moment a miracle appears, the chance of a complete renewal.",
            "Learn from the ruins and draw strength from the miracle; this is the perfect time to start over.",
        ],
        ComboTag::PerfectBalance => &[
            "Every factor is in perfect balance, a harmonious and stable state.",
            "Energy, surroundings and relationships all sit at their point of balance.",
            "Perfect balance brings stability, but you must actively keep it.",
        ],
        ComboTag::DeepIntrospection => &[
            "You are in a stage of deep introspection, a good time to get to know yourself again.",
            "Solitary surroundings and an inward mood give you room to think about your direction.",
            "In the silence you hear your own voice; it is time to meet yourself anew.",
        ],
        ComboTag::NewGrowth => &[
            "New life is sprouting, a beginning full of hope.",
            "Learning in a sheltered place, a new spark catches; growth is beginning.",
            "New strength is gathering, faint but full of potential.",
        ],
        ComboTag::RapidExpansion => &[
            "You are expanding quickly; opportunity and competition grow together.",
            "Energy surges and the field is full of openings, and rivals follow; adapt fast.",
            "A season of expansion has come; seize it, but do not overreach.",
        ],
        ComboTag::EndingAndRestart => &[
            "The old is ending and the new is about to begin, a moment of complete change.",
            "Endings hurt, but they also bring the chance to start over; do not fear change.",
            "When everything collapses it is also the best time to rebuild; face the ending bravely.",
        ],
        ComboTag::LeadershipPeak => &[
            "You are at the height of your leadership, the best time to exert influence.",
            "Energy, stage and miracle appear together, a leader's most brilliant hour.",
            "The peak of leadership has come; use it well and think about how to sustain it.",
        ],
        ComboTag::FierceConflict => &[
            "You are at the center of fierce conflict; stay calm and look for a way through.",
            "Conflicts break out on several fronts, a moment that demands wisdom and courage.",
            "The conflict is fierce, but it is also a chance to break through.",
        ],
        ComboTag::Harmony => &[
            "Every factor points to harmony, a good and stable state.",
            "Energy, surroundings and relationships are in harmony; cherish this moment.",
            "A harmonious combination brings good things; think about how to keep it.",
        ],
        ComboTag::LearningAndGrowth => &[
            "You are in a stage of learning and growth, a good time to build knowledge and experience.",
            "Learning in a protected place and meeting new inspiration, this is a golden age of growth.",
            "Learning and growing go hand in hand; take this chance to build your strength.",
        ],
        ComboTag::PowerConcentration => &[
            "You hold real power, a moment to show your influence.",
            "Power is gathered in your hands; use it well and remember the responsibility.",
            "Power and opportunity appear together, a good time to lead.",
        ],
        ComboTag::Drift => &[
            "You are drifting and need to find a steady direction.",
            "Resources, surroundings and relationships are all unsettled, a period of adjustment.",
            "Drifting brings uncertainty, and new possibilities with it.",
        ],
        ComboTag::Redemption => &[
            "In the darkest moment a light of redemption appears, a turn for the better.",
            "From the abyss you see hope; the power of redemption is at work.",
            "The moment of redemption has come; take this chance to free yourself from hardship.",
        ],
        ComboTag::BreakingTheOldOrder => &[
            "You are breaking an old order, the start of change.",
            "The force of rebellion and a shifting ground appear together, a time for reform.",
            "Breaking the old takes courage, and it is where a new order begins.",
        ],
        ComboTag::Legacy => &[
            "You are inheriting and carrying on, a bridge between past and future.",
            "Standing on high ground you inherit and meet the past again, a moment of legacy.",
            "The power of legacy is at work; think about how to continue it and renew it.",
        ],
    }
}

fn synthesis_lines(interaction: f64) -> &'static [&'static str] {
    if interaction > 8.0 {
        &[
            "These factors strongly reinforce each other, forming an unstoppable trend.",
            "Every card points the same way, and that force will push you forward.",
            "These factors work in perfect concert, creating a powerful combined force.",
        ]
    } else if interaction > 5.0 {
        &[
            "These factors reinforce each other, forming a strong trend.",
            "The cards are well aligned, and this amplifies their overall effect.",
            "These factors echo one another, forming a steady direction.",
        ]
    } else if interaction < -8.0 {
        &[
            "These factors clash hard, creating a highly unstable situation.",
            "The cards point in different directions; you need to find a point of balance.",
            "These factors work against each other; this period needs careful handling.",
        ]
    } else if interaction < -5.0 {
        &[
            "These factors conflict; you need to find a point of balance.",
            "The cards contradict each other; the different forces need reconciling.",
            "These factors stand opposed, a period that calls for wisdom.",
        ]
    } else {
        &[
            "These factors influence each other, forming a complex picture.",
            "The relationships between the cards are intricate; weigh each factor.",
            "These factors intertwine into a many-layered state.",
        ]
    }
}

fn energy_advice(flow: EnergyFlow) -> &'static [&'static str] {
    match flow {
        EnergyFlow::Abundant => &[
            "Your energy is high; launch important plans, but do not burn yourself out.",
            "In a time of plenty, use this force well and also store some for later.",
            "Make full use of this energy peak, and think about how to keep the momentum.",
        ],
        EnergyFlow::Steady => &[
            "Your energy is steady; advance your plans step by step and do not rush.",
            "Steady energy is the base of lasting progress; keep this rhythm.",
            "When energy is steady, it is a good time to set long-term plans.",
        ],
        EnergyFlow::Weak => &[
            "Your energy is low; this is a time to rest and recover, not to force action.",
            "When energy is short, look after body and mind first and set out again once restored.",
            "A low-energy period suits reflection and adjustment, preparing for the next stage.",
        ],
        EnergyFlow::Volatile => &[
            "Your energy swings widely; find a steady rhythm and avoid big decisions at the lows.",
            "When energy is unsettled, learn to regulate it: act at the highs and rest at the lows.",
            "Volatile energy asks you to be more flexible and adjust your plans to your state.",
        ],
    }
}

fn environment_advice(environment: Environment) -> &'static [&'static str] {
    match environment {
        Environment::Favorable => &[
            "Your surroundings favor you; use them fully, but stay humble.",
            "A favorable setting is an opening; seize it without depending on it too much.",
            "In good surroundings, think about how to make the most of them while building your own strengths.",
        ],
        Environment::Neutral => &[
            "Your surroundings are neutral; your actions decide the outcome, so create your own openings.",
            "In neutral surroundings the key is your choices; do not wait for things to change.",
            "The ground is even; this is your time to prove yourself through action.",
        ],
        Environment::Challenging => &[
            "Your surroundings are demanding; adjust your approach, but do not give up easily.",
            "A hard setting is a test and a chance to grow; learn to move forward through difficulty.",
            "Facing hard surroundings, stay calm, look for the opening and turn the crisis around.",
        ],
    }
}

fn relationship_advice(relationship: Relationship) -> &'static [&'static str] {
    match relationship {
        Relationship::Harmonious => &[
            "Your relationships are harmonious; cherish them and think about how to keep them so.",
            "Harmonious ties are a precious resource; lean on them, and give back too.",
            "In harmonious relationships, look for ways to deepen the bond.",
        ],
        Relationship::Balanced => &[
            "Keep your relationships in balance, neither too dependent nor too distant.",
            "Balanced relationships need active care; find the right way to engage.",
            "In balanced relationships, think about how to grow them without upsetting the harmony.",
        ],
        Relationship::Tense => &[
            "Your relationships are tense; change how you engage, but do not run away.",
            "Tense relationships need talk and understanding; try to see things from the other side.",
            "Facing strained relationships, stay calm and look for solutions rather than escalating.",
        ],
    }
}

fn variable_advice(impact: VariableImpact, favorable: bool, name: &str) -> String {
    match (impact, favorable) {
        (VariableImpact::Major, true) => {
            format!("The {name} brings a major turn; seize it and think about how to sustain it.")
        }
        (VariableImpact::Major, false) => format!(
            "The {name} brings a major shock; protect what is essential while looking for the turn."
        ),
        (VariableImpact::Moderate, true) => {
            format!("The {name} has a moderate effect; take the opening, but do not overreact.")
        }
        (VariableImpact::Moderate, false) => {
            format!("The {name} has a moderate effect; handle it carefully, but do not overreact.")
        }
        (VariableImpact::Minor, true) => {
            format!("The {name} is a small factor; enjoy what it brings without counting on it.")
        }
        (VariableImpact::Minor, false) => {
            format!("The {name} is a small factor; note it and keep your attention on the main road.")
        }
    }
}

const COMBINATION_ADVICE: [(ComboTag, &str); 4] = [
    (
        ComboTag::TurningPoint,
        "This is a key turning point and your choice matters; trust your judgement.",
    ),
    (
        ComboTag::Rebirth,
        "You see a chance of rebirth from the low point; do not fear starting over, it may be a better start.",
    ),
    (
        ComboTag::Crisis,
        "In a moment of crisis stay calm and look for the opening; crises often hide a turn.",
    ),
    (
        ComboTag::DeepIntrospection,
        "This is a time for deep introspection; think about your direction and do not rush to act.",
    ),
];

fn trend_advice(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "Your fortune is rising; seize the chance, but stay humble and avoid overconfidence.",
        Trend::Declining => {
            "Your fortune is dipping for now; use this time to adjust and prepare, a turn is coming."
        }
        Trend::Flat => "Your fortune is level; be patient, and create your own openings meanwhile.",
    }
}

fn horizon_advice(horizon: Horizon) -> Option<&'static str> {
    match horizon {
        Horizon::Short => Some("Changes will show within days; stay alert and ready to respond."),
        Horizon::Long => Some("This will unfold over months; plan for the long run and keep at it."),
        Horizon::Medium => None,
    }
}

const THEME_ADVICE: [(&[&str], &str); 3] = [
    (
        &["turning point", "turnaround"],
        "You are at a turning point; think through the consequences of each choice.",
    ),
    (
        &["anew", "fresh start"],
        "This is a chance to start afresh; do not let past failures hold you back.",
    ),
    (
        &["balance"],
        "Balance is the key; learn to find the point of balance between competing forces.",
    ),
];

fn closings(horizon: Horizon) -> &'static [&'static str] {
    match horizon {
        Horizon::Short => &[
            "Within the coming week these influences will surface; watch closely how things change.",
            "In the short term the trends these cards reveal will begin to act; stay alert.",
            "The next few days are a key period of observation; each decision may shape the outcome.",
            "Over the coming week these energies will start to flow; be ready for change.",
            "In the short run these factors will show themselves quickly; respond with agility.",
        ],
        Horizon::Medium => &[
            "Over the coming month these trends will keep developing; wait patiently for the results.",
            "In the medium term the state these cards reveal will settle, a time to lay foundations.",
            "This month is an important period of change; your actions will set the course.",
            "Over the coming month these influences will deepen; keep paying attention.",
            "Through this middle stretch these energies keep working; persist and adjust.",
        ],
        Horizon::Long => &[
            "This is a long-term trend that needs steady attention; your persistence will pay off.",
            "In the long run these influences will deepen, and today's effort will bear fruit.",
            "The coming months are an important stage of growth; plan for your long-term goals.",
            "This is an ongoing process that asks for patience and perseverance.",
            "A long-term trend has formed, and your choices will shape a long stretch ahead.",
        ],
    }
}

/// Compose the text of a fortune reading.
///
/// Randomness is drawn from `rng` only to pick within pools; every pool
/// choice and every override is a deterministic function of `calculation`.
pub fn generate_fortune_text(
    hand: &FortuneHand<'_>,
    calculation: &FortuneCalculation,
    rng: &mut dyn RandomSource,
) -> FortuneReading {
    let vars = [
        ("sky", hand.sky.name.as_str()),
        ("earth", hand.earth.name.as_str()),
        ("human", hand.human.name.as_str()),
        ("variable", hand.variable.name.as_str()),
    ];
    let dims = calculation.dimensions;
    let favorable = hand.variable.is_positive();

    let drawn_opening = pick(openings(calculation.level), rng);
    let opening = OPENING_OVERRIDES
        .iter()
        .find(|(tag, _)| calculation.has(*tag))
        .map_or(drawn_opening, |(_, text)| *text)
        .to_string();

    let mut analysis = vec![
        pick_filled(energy_lines(dims.energy_flow), &vars, rng),
        pick_filled(environment_lines(dims.environment), &vars, rng),
        pick_filled(relationship_lines(dims.relationship), &vars, rng),
        pick_filled(variable_lines(dims.variable_impact, favorable), &vars, rng),
    ];
    for &tag in &calculation.combinations {
        analysis.push(pick(combination_lines(tag), rng).to_string());
    }
    analysis.push(pick(synthesis_lines(calculation.interaction_score), rng).to_string());

    let mut advice = vec![
        pick(energy_advice(dims.energy_flow), rng).to_string(),
        pick(environment_advice(dims.environment), rng).to_string(),
        pick(relationship_advice(dims.relationship), rng).to_string(),
        variable_advice(dims.variable_impact, favorable, &hand.variable.name),
    ];
    if let Some((_, text)) = COMBINATION_ADVICE.iter().find(|(tag, _)| calculation.has(*tag)) {
        advice.push(text.to_string());
    }
    advice.push(trend_advice(calculation.trend).to_string());
    if let Some(text) = horizon_advice(calculation.horizon) {
        advice.push(text.to_string());
    }
    for (themes, text) in THEME_ADVICE {
        if themes.iter().any(|t| calculation.has_theme(t)) {
            advice.push(text.to_string());
        }
    }

    let drawn_closing = pick(closings(calculation.horizon), rng);
    let closing = CLOSING_OVERRIDES
        .iter()
        .find(|(tag, _)| calculation.has(*tag))
        .map_or(drawn_closing, |(_, text)| *text)
        .to_string();

    debug!(
        level = %calculation.level,
        advice = advice.len(),
        combinations = calculation.combinations.len(),
        "fortune text composed"
    );

    FortuneReading {
        card_ids: hand.ids(),
        level: calculation.level,
        opening,
        analysis: analysis.join(" "),
        advice,
        closing,
        dimensions: dims,
        key_themes: calculation.key_themes.clone(),
        combinations: calculation.combinations.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tj_deck::{Category, Deck};
    use tj_fortune::calculate_fortune;

    fn hand<'d>(deck: &'d Deck, names: [&str; 4]) -> FortuneHand<'d> {
        let cards: Vec<_> = names
            .iter()
            .map(|n| deck.find_by_name(n).unwrap())
            .collect();
        FortuneHand::from_cards(&cards).unwrap()
    }

    #[test]
    fn turning_point_overrides_opening_and_closing() {
        let deck = Deck::builtin().unwrap();
        let h = hand(&deck, ["Winter Solstice", "Crossroads", "Outsider", "Reunion"]);
        let calc = calculate_fortune(&h);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let text = generate_fortune_text(&h, &calc, &mut rng);
            assert_eq!(text.opening, OPENING_OVERRIDES[2].1);
            assert_eq!(text.closing, CLOSING_OVERRIDES[0].1);
            assert!(text.advice.contains(&COMBINATION_ADVICE[0].1.to_string()));
        }
    }

    #[test]
    fn rebirth_outranks_other_openings() {
        let deck = Deck::builtin().unwrap();
        let h = hand(&deck, ["Major Cold", "Ruins", "Apprentice", "Miracle"]);
        let calc = calculate_fortune(&h);
        assert!(calc.has(ComboTag::Rebirth));
        let mut rng = StdRng::seed_from_u64(3);
        let text = generate_fortune_text(&h, &calc, &mut rng);
        assert_eq!(text.opening, OPENING_OVERRIDES[0].1);
        assert_eq!(text.closing, CLOSING_OVERRIDES[1].1);
    }

    #[test]
    fn plain_hand_uses_level_pool() {
        let deck = Deck::builtin().unwrap();
        let h = hand(&deck, ["Grain Buds", "Plains", "Keystone", "Gift"]);
        let calc = calculate_fortune(&h);
        let mut rng = StdRng::seed_from_u64(9);
        let text = generate_fortune_text(&h, &calc, &mut rng);
        assert!(openings(calc.level).contains(&text.opening.as_str()));
        assert!(closings(calc.horizon).contains(&text.closing.as_str()));
        assert!(text.analysis.contains("Grain Buds"));
        assert!(text.analysis.contains("Plains"));
    }

    #[test]
    fn advice_covers_every_dimension() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for s in deck.in_category(Category::Sky).iter().take(6) {
            for v in deck.in_category(Category::Variable).iter().take(6) {
                let h = FortuneHand::new(s, deck.get("earth05").unwrap(), deck.get("human03").unwrap(), v)
                    .unwrap();
                let calc = calculate_fortune(&h);
                let text = generate_fortune_text(&h, &calc, &mut rng);
                assert!(text.advice.len() >= 5);
                assert!(text.advice[3].contains(&v.name));
            }
        }
    }

    #[test]
    fn theme_hit_adds_advice() {
        let deck = Deck::builtin().unwrap();
        // Spring Equinox and Tightrope both carry "balance"
        let h = hand(&deck, ["Spring Equinox", "Tightrope", "Outsider", "Void"]);
        let calc = calculate_fortune(&h);
        assert!(calc.has_theme("balance"));
        let mut rng = StdRng::seed_from_u64(2);
        let text = generate_fortune_text(&h, &calc, &mut rng);
        assert!(text.advice.iter().any(|a| a == THEME_ADVICE[2].1));
    }

    #[test]
    fn pools_are_filled() {
        for &level in FortuneLevel::all() {
            assert_eq!(openings(level).len(), 5);
        }
        for &horizon in Horizon::all() {
            assert_eq!(closings(horizon).len(), 5);
        }
        for &tag in ComboTag::all() {
            assert_eq!(combination_lines(tag).len(), 3);
        }
    }
}
