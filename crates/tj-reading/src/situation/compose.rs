//! Composes a situational reading from metrics, patterns and a lexicon.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tj_deck::{Card, Category, ContextProfile, Intensity, RandomSource};

use super::lexicon::{Cued, Lexicon, lexicon_for};
use super::metrics::{OverallState, Pattern, SituationMetrics, detect_patterns};
use crate::error::ReadingResult;
use crate::template::{clause, fill, pick_filled};

/// Most advice lines a situational reading returns.
pub const MAX_ADVICE: usize = 5;
/// Most insights when the profile has a lexicon.
pub const MAX_INSIGHTS: usize = 4;
/// Most insights on the generic fallback.
pub const MAX_FALLBACK_INSIGHTS: usize = 3;

/// The text of a situational reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationReading {
    /// Profile the reading was written for.
    pub profile_id: String,
    /// Ids of the drawn cards, in draw order.
    pub card_ids: Vec<String>,
    /// Local overall state.
    pub state: OverallState,
    /// Patterns detected in the draw.
    pub patterns: Vec<Pattern>,
    /// Opening sentence.
    pub opening: String,
    /// Analysis paragraph.
    pub analysis: String,
    /// At most [`MAX_ADVICE`] lines, in generation order.
    pub advice: Vec<String>,
    /// Closing sentence.
    pub closing: String,
    /// Highlights of individual cards and patterns, deduplicated.
    pub key_insights: Vec<String>,
}

fn openings(state: OverallState) -> &'static [&'static str] {
    match state {
        OverallState::Excellent => &[
            "In {domain}, you are in a stage overflowing with energy.",
            "The cards show {domain} in a very positive state, full of possibility.",
            "What you have now is enough to lift {domain} to a higher level.",
            "Energy flows freely {area}; this is a good time to show what you can do.",
            "You stand at a favorable starting point {area}, with openings right in front of you.",
        ],
        OverallState::Good => &[
            "Overall, {domain} is rising steadily.",
            "The cards show {domain} is not perfect, but it is strong enough to support your goals.",
            "There are challenges {area}, but you have the resources to meet them.",
            "Things are improving {area}; now is a good time to act.",
            "You are on an upward track {area}, and steady effort will pay off.",
        ],
        OverallState::Neutral => &[
            "In {domain}, you are in a period of transition that needs careful watching.",
            "The cards show {domain} fairly calm, with change stirring underneath.",
            "This is a stage {area} that asks for patience.",
            "Energy flows evenly {area}, but watch the small shifts.",
            "You are in an in-between time {area}; keep your balance.",
        ],
        OverallState::Challenging => &[
            "In {domain}, you are facing some difficulties and need to tread carefully.",
            "The cards show {domain} needs a change of approach.",
            "Conditions {area} are not on your side right now; rethink your plans.",
            "Energy is blocked {area}; this is a test of your resilience.",
            "You are in a stage {area} that calls for adjustment; staying calm matters.",
        ],
        OverallState::Critical => &[
            "In {domain}, you are in an extremely demanding stage.",
            "The cards show {domain} facing a major test.",
            "Things are severe {area}, yet this may be where the turn begins.",
            "Energy is at its lowest {area}, which also means a turn is close.",
            "This is the moment {area} that most asks you to hold on; your effort will bring change.",
        ],
    }
}

fn closings(state: OverallState) -> &'static [&'static str] {
    match state {
        OverallState::Excellent => &[
            "Stay focused and patient {area}; your effort will be richly rewarded.",
            "The road ahead for {domain} has its challenges, but you have what it takes.",
            "Seize the openings in front of you; what lies ahead for {domain} is brighter still.",
        ],
        OverallState::Good => &[
            "Stay focused and patient {area}; your effort will pay off.",
            "Keep going steadily, and {domain} will keep getting better.",
            "Keep your current rhythm; openings will appear when you least expect them.",
        ],
        OverallState::Neutral => &[
            "Stay patient and observant {area}; act when the timing is right.",
            "The calm is temporary; stay ready, and take the opening when it comes.",
            "Do not rush; steady progress will prove its worth in time.",
        ],
        OverallState::Challenging => &[
            "Face the challenges {area} calmly, and ask for support when you need it.",
            "The difficulty is temporary; adjust, start again and you will find a way.",
            "Stay resilient and patient; trust your ability, and this will pass.",
        ],
        OverallState::Critical => &[
            "This is the moment that most asks you to hold on {area}; your effort will bring a turn.",
            "Learn from the low point and grow through the difficulty; this could be a turning point for {domain}.",
            "Keep hope and courage; the hardest moment is often where the turn begins.",
        ],
    }
}

fn energy_lines(energy: u8) -> &'static [&'static str] {
    match energy {
        7.. => &[
            "{card} shows your energy {area} running high; that force will carry you forward.",
            "Judging by {card}, you have enough energy to meet the challenges {area}.",
            "The energy {card} brings is strong, well suited to launching important plans.",
        ],
        5..=6 => &[
            "{card} shows your energy {area} holding steady, a base you can build on.",
            "Judging by {card}, your energy flows evenly; move forward step by step.",
            "The energy {card} brings is not intense, but it is dependable and suits long-term plans.",
        ],
        _ => &[
            "{card} shows your energy {area} running low; recover before you act.",
            "Judging by {card}, you lack the energy for large undertakings right now.",
            "The energy {card} brings is faint; this is a time to rest and gather strength.",
        ],
    }
}

fn environment_lines(direction: i8) -> &'static [&'static str] {
    match direction {
        1.. => &[
            "In the {card}, conditions favor you; make full use of what is there.",
            "The {card} gives you good ground {area}; this is a good time to act.",
            "Judging by the {card}, your surroundings are friendly and ready for your plans.",
        ],
        0 => &[
            "In the {card}, conditions are neutral; you will have to make your own openings.",
            "The {card} neither helps nor hinders much; the outcome rests on your choices.",
            "Judging by the {card}, your surroundings are neutral and your actions decide the result.",
        ],
        _ => &[
            "In the {card}, you face real challenges and must proceed with care.",
            "The {card} sets a demanding stage {area}, a moment that tests your abilities.",
            "Judging by the {card}, your surroundings are unfriendly; change your approach.",
        ],
    }
}

fn trend_line(direction_sum: i32) -> &'static str {
    match direction_sum {
        2.. => "Overall, {domain} is rising strongly; this is a time for bold action.",
        1 => "Overall, {domain} is rising steadily; keep your current pace.",
        0 => "Overall, {domain} is in balance; wait patiently for the right moment.",
        -1 => "Overall, {domain} faces some challenges; adjust your approach.",
        _ => "Overall, {domain} is at a low point, but this is also where the turn begins.",
    }
}

fn horizon_phrase(temporal: u8) -> &'static str {
    match temporal {
        0 | 1 => "in the short term",
        2 => "over the medium term",
        _ => "over the long term",
    }
}

fn lead_sentence(card: &Card, lexicon: &Lexicon, vars: &[(&str, &str)], rng: &mut dyn RandomSource) -> String {
    match card.category {
        Category::Sky => pick_filled(energy_lines(card.energy), vars, rng),
        Category::Earth => pick_filled(environment_lines(card.direction), vars, rng),
        Category::Human => {
            let effect = match card.direction {
                d if d > 0 => "and it will bring you support",
                d if d < 0 => "and it asks you to change how you engage",
                _ => "and it asks you to keep your balance",
            };
            format!("As the {}, you play this role {}, {effect}.", card.name, lexicon.area)
        }
        Category::Variable if card.is_extreme() => {
            let turn = if card.is_positive() {
                "bring a major turn"
            } else {
                "deliver a major shock"
            };
            format!(
                "Watch the {} closely: it will {turn}, so prepare thoroughly.",
                card.name
            )
        }
        Category::Variable => {
            let (effect, response) = if card.is_positive() {
                ("offer you some openings", "seize them")
            } else {
                ("bring some challenges", "handle them carefully")
            };
            format!("The {} will {effect}; {response}.", card.name)
        }
    }
}

fn second_sentence(card: &Card, lexicon: &Lexicon) -> String {
    if card.category == Category::Human {
        return format!(
            "Among the people {}, you stand where the {} stands: {}?",
            lexicon.area,
            card.name,
            lower_first(clause(&card.reflection))
        );
    }
    let effect = match card.direction {
        d if d > 0 => format!("has a positive effect on {}", lexicon.domain),
        d if d < 0 => format!("brings challenges to {}", lexicon.domain),
        _ => format!("leaves {} unchanged", lexicon.domain),
    };
    let reach = if card.impact >= 7 { "a major" } else { "a moderate" };
    format!("The {} {effect}, with {reach} reach.", card.name)
}

fn third_sentence(card: &Card) -> String {
    let outcome = match card.direction {
        d if d > 0 => "bring opportunity",
        d if d < 0 => "bring a test",
        _ => "keep things as they are",
    };
    format!(
        "Finally, the {} will {outcome} {}.",
        card.name,
        horizon_phrase(card.temporal)
    )
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn compose_analysis(
    cards: &[&Card],
    metrics: &SituationMetrics,
    patterns: &[Pattern],
    lexicon: &Lexicon,
    rng: &mut dyn RandomSource,
) -> String {
    let mut parts = Vec::new();
    if let Some(first) = cards.first() {
        let vars = [("card", first.name.as_str()), ("area", lexicon.area)];
        parts.push(lead_sentence(first, lexicon, &vars, rng));
    }
    if let Some(second) = cards.get(1) {
        parts.push(second_sentence(second, lexicon));
    }
    if let Some(third) = cards.get(2) {
        parts.push(third_sentence(third));
    }
    for card in cards {
        if let Some((_, note)) = lexicon
            .card_notes
            .iter()
            .find(|(names, _)| names.contains(&card.name.as_str()))
        {
            parts.push(fill(note, &[("card", card.name.as_str())]));
        }
    }
    if let Some((_, note)) = lexicon
        .pattern_notes
        .iter()
        .find(|(pattern, _)| patterns.contains(pattern))
    {
        parts.push(note.to_string());
    }
    parts.push(fill(
        trend_line(metrics.direction_sum),
        &[("domain", lexicon.domain)],
    ));
    parts.join(" ")
}

fn compose_advice(
    cards: &[&Card],
    metrics: &SituationMetrics,
    patterns: &[Pattern],
    lexicon: &Lexicon,
) -> Vec<String> {
    let mut advice: Vec<String> = Vec::new();
    let push_cued = |advice: &mut Vec<String>, cued: Option<Cued>| {
        if let Some((_, text)) = cued.filter(|(cue, _)| cue.matches(cards, metrics.state)) {
            advice.push(text.to_string());
        }
    };

    if metrics.energy_average >= 7.0 {
        advice.extend(lexicon.energized.iter().map(|s| s.to_string()));
        push_cued(&mut advice, lexicon.energized_extra);
    } else if metrics.energy_average < 5.0 {
        advice.extend(lexicon.drained.iter().map(|s| s.to_string()));
        push_cued(&mut advice, lexicon.drained_extra);
    }

    if metrics.direction_sum >= 2 {
        advice.push(lexicon.rising.to_string());
    } else if metrics.direction_sum < 0 {
        advice.push(lexicon.falling.to_string());
        push_cued(&mut advice, lexicon.falling_extra);
    }

    for card in cards {
        if let Some((_, text)) = lexicon
            .card_advice
            .iter()
            .find(|(names, _)| names.contains(&card.name.as_str()))
        {
            advice.push(fill(text, &[("card", card.name.as_str())]));
        }
    }

    if metrics.temporal_average <= 1.5 {
        advice.push(format!(
            "Things will change quickly {}; follow developments closely",
            lexicon.area
        ));
    } else if metrics.temporal_average >= 2.5 {
        advice.push(format!(
            "This is a long-term trend for {}; keep planning and do not rush",
            lexicon.domain
        ));
    }

    if let Some((_, text)) = lexicon
        .pattern_advice
        .iter()
        .find(|(pattern, _)| patterns.contains(pattern))
    {
        advice.push(text.to_string());
    }

    if advice.len() < 3 {
        advice.extend(lexicon.filler.iter().map(|s| s.to_string()));
    }
    advice.truncate(MAX_ADVICE);
    advice
}

fn push_unique(insights: &mut Vec<String>, insight: String) {
    if !insights.contains(&insight) {
        insights.push(insight);
    }
}

fn compose_insights(cards: &[&Card], patterns: &[Pattern]) -> Vec<String> {
    let mut insights = Vec::new();
    for card in cards.iter().filter(|c| c.is_extreme()) {
        let weight = if card.is_positive() {
            "a rare opportunity"
        } else {
            "a serious challenge"
        };
        push_unique(
            &mut insights,
            format!("{}: a pivotal moment, {weight}, deserves close attention", card.name),
        );
    }
    for card in cards.iter().filter(|c| c.is_negative() && c.impact >= 7) {
        push_unique(
            &mut insights,
            format!("Watch the challenge {} brings. {}", card.name, card.reflection.trim()),
        );
    }
    for card in cards.iter().filter(|c| c.is_positive() && c.impact >= 8) {
        if insights.iter().any(|i| i.contains(card.name.as_str())) {
            continue;
        }
        push_unique(
            &mut insights,
            format!("{}: an important opportunity. {}", card.name, card.reflection.trim()),
        );
    }

    let pattern_insight = if patterns.contains(&Pattern::TurningPoint) {
        Some("This is a key turning point; your choice will decide the direction ahead")
    } else if patterns.contains(&Pattern::Rebirth) {
        Some("You see the first light of rebirth from the low point, a good time to start over")
    } else if patterns.contains(&Pattern::Crisis) {
        Some("Several crises arrive at once, but crisis also hides a turn")
    } else {
        None
    };
    if let Some(text) = pattern_insight {
        push_unique(&mut insights, text.to_string());
    }
    insights.truncate(MAX_INSIGHTS);
    insights
}

fn ordinal(position: usize) -> &'static str {
    match position {
        0 => "first",
        1 => "second",
        2 => "third",
        3 => "fourth",
        4 => "fifth",
        _ => "next",
    }
}

fn generic_card_sentence(card: &Card, position: usize) -> String {
    let nth = ordinal(position);
    match card.category {
        Category::Sky => {
            let level = match card.energy {
                7.. => "very abundant",
                5..=6 => "fairly steady",
                _ => "rather low",
            };
            format!(
                "The {nth} card, {}, shows your energy is {level}. {}",
                card.name,
                card.omen.trim()
            )
        }
        Category::Earth => {
            let conditions = match card.direction {
                d if d > 0 => "favorable",
                d if d < 0 => "challenging",
                _ => "neutral",
            };
            format!(
                "In the {nth} card, the {}, you face {conditions} conditions. {}",
                card.name,
                card.omen.trim()
            )
        }
        Category::Human => format!(
            "The {nth} card, the {}, asks: {}",
            card.name,
            card.reflection.trim()
        ),
        Category::Variable => {
            let weight = match card.intensity {
                Intensity::Extreme => "a major",
                Intensity::High => "a moderate",
                _ => "a slight",
            };
            format!(
                "The {nth} card, the {}, will have {weight} effect. {}",
                card.name,
                card.omen.trim()
            )
        }
    }
}

fn generic_opening(state: OverallState) -> &'static str {
    match state {
        OverallState::Excellent => "you are in a stage overflowing with energy.",
        OverallState::Good => "the overall trend is rising steadily.",
        OverallState::Neutral => "you are in a period of transition that needs careful watching.",
        OverallState::Challenging => "you are facing some difficulties and need to tread carefully.",
        OverallState::Critical => "you are in an extremely demanding stage.",
    }
}

struct Sections {
    opening: String,
    analysis: String,
    advice: Vec<String>,
    closing: String,
    key_insights: Vec<String>,
}

fn fallback_sections(cards: &[&Card], profile: &ContextProfile, metrics: &SituationMetrics) -> Sections {
    let opening = format!("In {}, {}", profile.name, generic_opening(metrics.state));
    let analysis = cards
        .iter()
        .enumerate()
        .map(|(i, c)| generic_card_sentence(c, i))
        .collect::<Vec<_>>()
        .join(" ");

    let mut advice = Vec::new();
    if metrics.energy_average >= 7.0 {
        advice.push("Seize the present openings and act".to_string());
    } else if metrics.energy_average < 5.0 {
        advice.push("Slow your pace and give yourself time to rest".to_string());
    }
    if metrics.direction_sum >= 1 {
        advice.push("Things are rising; keep your current pace".to_string());
    } else if metrics.direction_sum < 0 {
        advice.push("Meet the challenges calmly and rationally".to_string());
    }
    advice.push("Stay patient and focused".to_string());
    advice.push("Seek expert advice".to_string());
    advice.truncate(MAX_ADVICE);

    let closing = "Trust that your effort will bring change.".to_string();

    let mut insights = Vec::new();
    for card in cards {
        if card.is_extreme() {
            push_unique(
                &mut insights,
                format!("{}: a pivotal moment that deserves close attention", card.name),
            );
        }
        if card.is_negative() && card.impact >= 7 {
            push_unique(&mut insights, format!("Watch the challenge {} brings", card.name));
        }
        if card.is_positive() && card.impact >= 8 {
            push_unique(
                &mut insights,
                format!("{}: an important opportunity worth seizing", card.name),
            );
        }
    }
    insights.truncate(MAX_FALLBACK_INSIGHTS);

    Sections {
        opening,
        analysis,
        advice,
        closing,
        key_insights: insights,
    }
}

/// Compose a situational reading for `cards` drawn under `profile`.
///
/// Built-in profiles use their lexicon; any other profile gets the generic
/// per-card description. Advice never exceeds [`MAX_ADVICE`] lines.
pub fn generate_situation_interpretation(
    cards: &[&Card],
    profile: &ContextProfile,
    rng: &mut dyn RandomSource,
) -> ReadingResult<SituationReading> {
    let metrics = SituationMetrics::from_cards(cards)?;
    let patterns = detect_patterns(cards);

    let sections = match lexicon_for(&profile.id) {
        Some(lexicon) => {
            let vars = [("domain", lexicon.domain), ("area", lexicon.area)];
            let drawn = pick_filled(openings(metrics.state), &vars, rng);
            let (cue, spotlight) = lexicon.spotlight;
            let opening = if cue.matches(cards, metrics.state) {
                spotlight.to_string()
            } else {
                drawn
            };
            Sections {
                opening,
                analysis: compose_analysis(cards, &metrics, &patterns, lexicon, rng),
                advice: compose_advice(cards, &metrics, &patterns, lexicon),
                closing: pick_filled(closings(metrics.state), &vars, rng),
                key_insights: compose_insights(cards, &patterns),
            }
        }
        None => fallback_sections(cards, profile, &metrics),
    };

    debug!(
        profile = %profile.id,
        state = %metrics.state,
        patterns = patterns.len(),
        advice = sections.advice.len(),
        "situation reading composed"
    );

    Ok(SituationReading {
        profile_id: profile.id.clone(),
        card_ids: cards.iter().map(|c| c.id.clone()).collect(),
        state: metrics.state,
        patterns,
        opening: sections.opening,
        analysis: sections.analysis,
        advice: sections.advice,
        closing: sections.closing,
        key_insights: sections.key_insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadingError;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tj_deck::{Deck, ProfileCatalog};

    fn named<'d>(deck: &'d Deck, names: &[&str]) -> Vec<&'d Card> {
        names.iter().map(|n| deck.find_by_name(n).unwrap()).collect()
    }

    #[test]
    fn work_spotlight_needs_excellent_state() {
        let deck = Deck::builtin().unwrap();
        let profiles = ProfileCatalog::builtin().unwrap();
        let work = profiles.get("work").unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let cards = named(&deck, &["Summer Solstice", "Navigator", "Miracle"]);
        let reading = generate_situation_interpretation(&cards, work, &mut rng).unwrap();
        assert_eq!(reading.state, OverallState::Excellent);
        assert_eq!(reading.opening, lexicon_for("work").unwrap().spotlight.1);

        let cards = named(&deck, &["Summer Solstice", "Rival", "Trap"]);
        let reading = generate_situation_interpretation(&cards, work, &mut rng).unwrap();
        assert_ne!(reading.opening, lexicon_for("work").unwrap().spotlight.1);
    }

    #[test]
    fn love_spotlight_checks_every_card() {
        let deck = Deck::builtin().unwrap();
        let profiles = ProfileCatalog::builtin().unwrap();
        let love = profiles.get("love").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let cards = named(&deck, &["Rain Water", "Mediator", "Encounter"]);
        let reading = generate_situation_interpretation(&cards, love, &mut rng).unwrap();
        assert_eq!(reading.opening, lexicon_for("love").unwrap().spotlight.1);
    }

    #[test]
    fn analysis_follows_draw_order() {
        let deck = Deck::builtin().unwrap();
        let profiles = ProfileCatalog::builtin().unwrap();
        let work = profiles.get("work").unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let cards = named(&deck, &["Plains", "Mentor", "Gale"]);
        let reading = generate_situation_interpretation(&cards, work, &mut rng).unwrap();
        assert!(reading.analysis.contains("Plains"));
        assert!(reading.analysis.contains("you stand where the Mentor stands"));
        assert!(reading.analysis.contains("Finally, the Gale will bring a test in the short term."));
        assert!(reading.analysis.ends_with("Overall, your work is rising steadily; keep your current pace."));
    }

    #[test]
    fn advice_is_capped_in_generation_order() {
        let deck = Deck::builtin().unwrap();
        let profiles = ProfileCatalog::builtin().unwrap();
        let work = profiles.get("work").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        // energy 9+8+9 => energized pair + leader line, rising, then card advice
        let cards = named(&deck, &["Summer Solstice", "Navigator", "Miracle"]);
        let reading = generate_situation_interpretation(&cards, work, &mut rng).unwrap();
        let lexicon = lexicon_for("work").unwrap();
        assert_eq!(reading.advice.len(), MAX_ADVICE);
        assert_eq!(reading.advice[0], lexicon.energized[0]);
        assert_eq!(reading.advice[2], lexicon.energized_extra.unwrap().1);
        assert_eq!(reading.advice[3], lexicon.rising);
    }

    #[test]
    fn short_advice_gets_filler() {
        let deck = Deck::builtin().unwrap();
        let profiles = ProfileCatalog::builtin().unwrap();
        let work = profiles.get("work").unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        // energy 5, direction 0, temporal 2, no card advice
        let cards = named(&deck, &["Spring Equinox", "Mediator", "Autumn Equinox"]);
        let reading = generate_situation_interpretation(&cards, work, &mut rng).unwrap();
        assert_eq!(reading.advice.len(), 3);
        assert_eq!(reading.advice[0], lexicon_for("work").unwrap().filler[0]);
    }

    #[test]
    fn insights_are_deduplicated_and_capped() {
        let deck = Deck::builtin().unwrap();
        let profiles = ProfileCatalog::builtin().unwrap();
        let health = profiles.get("health").unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let cards = named(&deck, &["Major Cold", "Ruins", "Miracle"]);
        let reading = generate_situation_interpretation(&cards, health, &mut rng).unwrap();
        assert_eq!(reading.key_insights.len(), MAX_INSIGHTS);
        assert!(reading.key_insights[0].starts_with("Major Cold: a pivotal moment, a serious challenge"));
        assert!(reading.key_insights[2].starts_with("Miracle: a pivotal moment, a rare opportunity"));
        assert!(!reading.key_insights.iter().any(|i| i.contains("important opportunity")));
    }

    #[test]
    fn unknown_profile_uses_fallback() {
        let deck = Deck::builtin().unwrap();
        let mut custom = ProfileCatalog::builtin().unwrap().get("work").unwrap().clone();
        custom.id = "gardening".into();
        custom.name = "Gardening".into();
        let mut rng = StdRng::seed_from_u64(10);
        let cards = named(&deck, &["Major Heat", "Abyss", "Betrayer", "Lightning"]);
        let reading = generate_situation_interpretation(&cards, &custom, &mut rng).unwrap();
        assert_eq!(reading.opening, "In Gardening, you are in an extremely demanding stage.");
        assert!(reading.analysis.starts_with("The first card, Major Heat,"));
        assert_eq!(reading.closing, "Trust that your effort will bring change.");
        assert_eq!(reading.advice.last().unwrap(), "Seek expert advice");
        assert_eq!(reading.key_insights.len(), MAX_FALLBACK_INSIGHTS);
    }

    #[test]
    fn empty_draw_is_an_error() {
        let profiles = ProfileCatalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_situation_interpretation(&[], profiles.get("work").unwrap(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, ReadingError::EmptyDraw));
    }

    proptest! {
        #[test]
        fn advice_never_exceeds_cap(
            profile in 0usize..8,
            picks in proptest::collection::vec(0usize..72, 1..6),
            seed in any::<u64>(),
        ) {
            let deck = Deck::builtin().unwrap();
            let profiles = ProfileCatalog::builtin().unwrap();
            let profile = &profiles.profiles()[profile];
            let cards: Vec<&Card> = picks.iter().map(|&i| &deck.cards()[i]).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let reading = generate_situation_interpretation(&cards, profile, &mut rng).unwrap();
            prop_assert!(!reading.advice.is_empty());
            prop_assert!(reading.advice.len() <= MAX_ADVICE);
            prop_assert!(reading.key_insights.len() <= MAX_INSIGHTS);
        }
    }
}
