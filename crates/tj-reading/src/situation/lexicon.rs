//! Per-profile wording for situational readings.
//!
//! A lexicon supplies the domain phrases and the card- and pattern-specific
//! sentences for one built-in profile; the composer supplies the structure.
//! Profiles without a lexicon get the generic fallback.

use tj_deck::{Card, Category};

use super::metrics::{OverallState, Pattern};

/// A condition on the drawn cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Any drawn card has one of these names.
    AnyOf(&'static [&'static str]),
    /// The state is excellent and any drawn card has one of these names.
    ExcellentWith(&'static [&'static str]),
    /// The first Human card drawn has one of these names.
    FirstHumanOf(&'static [&'static str]),
    /// Some drawn card is both extreme and adverse.
    ExtremeAdverse,
}

impl Cue {
    /// Whether the cue fires for `cards` in `state`.
    pub fn matches(self, cards: &[&Card], state: OverallState) -> bool {
        let named = |names: &[&str]| cards.iter().any(|c| names.contains(&c.name.as_str()));
        match self {
            Self::AnyOf(names) => named(names),
            Self::ExcellentWith(names) => state == OverallState::Excellent && named(names),
            Self::FirstHumanOf(names) => cards
                .iter()
                .find(|c| c.category == Category::Human)
                .is_some_and(|c| names.contains(&c.name.as_str())),
            Self::ExtremeAdverse => cards.iter().any(|c| c.is_extreme() && c.is_negative()),
        }
    }
}

/// A sentence gated by a [`Cue`].
pub type Cued = (Cue, &'static str);

/// Card names paired with a sentence; `{card}` is replaced by the name.
pub type CardLine = (&'static [&'static str], &'static str);

/// The wording of one profile.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    /// Profile id this lexicon serves.
    pub profile: &'static str,
    /// Noun phrase for the life domain, e.g. "your work".
    pub domain: &'static str,
    /// Prepositional phrase placing things in the domain, e.g. "at work".
    pub area: &'static str,
    /// Fixed opening that replaces the drawn one.
    pub spotlight: Cued,
    /// Advice when energy is high.
    pub energized: &'static [&'static str],
    /// Extra advice when energy is high.
    pub energized_extra: Option<Cued>,
    /// Advice when energy is low.
    pub drained: &'static [&'static str],
    /// Extra advice when energy is low.
    pub drained_extra: Option<Cued>,
    /// Advice when the direction sum is 2 or more.
    pub rising: &'static str,
    /// Advice when the direction sum is negative.
    pub falling: &'static str,
    /// Extra advice when the direction sum is negative.
    pub falling_extra: Option<Cued>,
    /// Per-card analysis notes.
    pub card_notes: &'static [CardLine],
    /// Per-card advice; each card contributes its first match.
    pub card_advice: &'static [CardLine],
    /// Analysis note for the first matching pattern.
    pub pattern_notes: &'static [(Pattern, &'static str)],
    /// Advice for the first matching pattern.
    pub pattern_advice: &'static [(Pattern, &'static str)],
    /// Appended when fewer than three advice lines were produced.
    pub filler: [&'static str; 3],
}

const REST_CARDS: &[&str] = &["Minor Snow", "Start of Winter"];
const SHOCK_CARDS: &[&str] = &["Lightning", "Earthquake"];
const RISK_CARDS: &[&str] = &["Trap", "Lightning"];
const WINDFALL_CARDS: &[&str] = &["Gift", "Rain Water"];
const MEETING_CARDS: &[&str] = &["Encounter", "Reunion"];
const HEAT_CARDS: &[&str] = &["Major Heat", "Minor Heat"];
const SPROUT_CARDS: &[&str] = &["Start of Spring", "Awakening of Insects"];

/// Lexicons of the built-in profiles.
pub const LEXICONS: [Lexicon; 8] = [
    Lexicon {
        profile: "work",
        domain: "your work",
        area: "at work",
        spotlight: (
            Cue::ExcellentWith(&["Navigator", "Summer Solstice"]),
            "At work you are at the height of your leadership and influence, the best moment to show what you can do.",
        ),
        energized: &[
            "Seize the openings at work now and show what you are capable of",
            "Consider taking on more responsibility or a new project",
        ],
        energized_extra: Some((
            Cue::AnyOf(&["Navigator", "Mentor"]),
            "As a leader, use your influence well and take the team forward with you",
        )),
        drained: &[
            "Adjust your working rhythm and give yourself time to rest and recover",
            "Talk with your manager or colleagues about balancing the load",
        ],
        drained_extra: Some((
            Cue::AnyOf(REST_CARDS),
            "This is a time to rest and store up energy; do not rush into action",
        )),
        rising: "Your career is on the rise; seize the chance, but stay humble and clear-headed",
        falling: "When work gets hard, stay calm and ask colleagues or a mentor for advice and support",
        falling_extra: Some((
            Cue::ExtremeAdverse,
            "Facing a major challenge, do not fight alone; the team's support matters",
        )),
        card_notes: &[],
        card_advice: &[
            (&["Crossroads"], "You are at a key decision point; trust your instincts, but gather enough information first"),
            (&["Rival"], "In a competitive setting, focus on raising your own game rather than comparing yourself with others"),
            (SHOCK_CARDS, "When change hits suddenly, protecting your core values and goals matters more than anything"),
            (&["Miracle"], "When an opening appears, think about what it means rather than just feeling lucky, and get ready"),
            (&["Trap"], "Weigh work decisions carefully to avoid the trap, and listen to other points of view"),
        ],
        pattern_notes: &[
            (Pattern::ExtremeCombo, "This is an extreme combination at work; every factor points one way and its force is magnified, so prepare thoroughly."),
            (Pattern::EnergyPeak, "Your working energy is at a peak, the best moment to show influence and leadership."),
            (Pattern::TurningPoint, "This is a key turning point in your career; your choice will set its course."),
            (Pattern::Crisis, "Danger surrounds you at work, but the crisis hides a turn; keep calm."),
            (Pattern::Rebirth, "From the deepest low you see the first light of rebirth, a perfect time to make a fresh start at work."),
        ],
        pattern_advice: &[
            (Pattern::Crisis, "In a crisis, stay calm, make a plan and be ready for the worst case"),
            (Pattern::Rebirth, "This is a good time to begin again; let go of old baggage and meet the new challenge"),
        ],
        filler: [
            "Keep your current pace at work and keep building experience and skill",
            "Focus on the long term; steady progress matters more than speed",
            "Keep communication open with colleagues and managers to build trust",
        ],
    },
    Lexicon {
        profile: "love",
        domain: "your love life",
        area: "in your relationships",
        spotlight: (
            Cue::AnyOf(MEETING_CARDS),
            "In love, fate is at work; a meeting, or a meeting again, may change everything.",
        ),
        energized: &[
            "Express your feelings openly and let the other person know where you stand",
            "Make time for the relationship and create shared moments",
        ],
        energized_extra: Some((
            Cue::AnyOf(MEETING_CARDS),
            "A new or renewed connection is forming; be sincere and take the time to know each other",
        )),
        drained: &[
            "Give the relationship some room, and give yourself some too",
            "Look after yourself first; a steady heart makes for a steady relationship",
        ],
        drained_extra: Some((
            Cue::AnyOf(REST_CARDS),
            "This is a quiet season for the heart; there is no need to force closeness",
        )),
        rising: "Your relationship is warming; enjoy it, and keep listening as well as speaking",
        falling: "When things are tense, talk honestly and try to see it from the other side",
        falling_extra: Some((
            Cue::AnyOf(&["Betrayer", "Rival"]),
            "Trust has been shaken; protect your own boundaries while you work out what happened",
        )),
        card_notes: &[],
        card_advice: &[
            (&["Encounter"], "A new connection is appearing; stay open, but take time to know the person"),
            (&["Reunion"], "Someone from the past returns; be clear about what you want before you respond"),
            (&["Mediator"], "Be the one who listens; a calm word now prevents a larger quarrel"),
            (&["Stranger", "Outsider"], "Distance has crept in; take the first step to close it"),
            (&["Miracle"], "Something unexpected is on your side; welcome it without clinging to it"),
        ],
        pattern_notes: &[
            (Pattern::Concentration(Category::Human), "The people around you dominate this reading; your relationships are the heart of the matter."),
            (Pattern::TurningPoint, "This is a turning point in love; what you choose now shapes what follows."),
            (Pattern::Crisis, "Several strains arrive at once, yet facing them together can bring you closer."),
        ],
        pattern_advice: &[
            (Pattern::Crisis, "Do not make lasting decisions in the heat of the moment; let things cool first"),
            (Pattern::Rebirth, "A relationship can begin again; leave old grievances behind"),
        ],
        filler: [
            "Keep listening to each other and make room for small kindnesses",
            "Be honest about your needs without turning them into demands",
            "Give the relationship time; trust grows slowly",
        ],
    },
    Lexicon {
        profile: "health",
        domain: "your health",
        area: "for your body and mind",
        spotlight: (
            Cue::AnyOf(REST_CARDS),
            "For your health, this is a season of rest; recovery comes before any new effort.",
        ),
        energized: &[
            "Your vitality is high; keep up regular exercise, but do not overdo it",
            "Use this energy to build healthy habits that will last",
        ],
        energized_extra: Some((
            Cue::AnyOf(HEAT_CARDS),
            "Too much heat burns out; watch for strain and cool down between efforts",
        )),
        drained: &[
            "Your energy is low; put sleep and rest first",
            "Lighten your schedule and let your body recover",
        ],
        drained_extra: Some((
            Cue::AnyOf(REST_CARDS),
            "This is a time for deep rest; do not push yourself",
        )),
        rising: "Your condition is improving; keep the routine that got you here",
        falling: "Listen to your body's warning signs and do not ignore them",
        falling_extra: Some((
            Cue::ExtremeAdverse,
            "If something feels seriously wrong, see a professional rather than waiting",
        )),
        card_notes: &[
            (HEAT_CARDS, "{card} warns that overwork and stress are building up."),
        ],
        card_advice: &[
            (HEAT_CARDS, "Manage stress and avoid overwork; cool down before you burn out"),
            (SHOCK_CARDS, "Sudden shocks take a toll; keep your routines steady to absorb them"),
            (REST_CARDS, "Rest is part of the cure; give it the time it needs"),
        ],
        pattern_notes: &[
            (Pattern::EnergyPeak, "Your energy is at a peak; channel it into habits rather than spending it all at once."),
            (Pattern::Crisis, "Several strains weigh on you at once; slow down before they add up."),
        ],
        pattern_advice: &[
            (Pattern::Crisis, "Several pressures at once call for a check-up and a lighter load"),
            (Pattern::Rebirth, "A fresh start for your health is possible; begin with one small habit"),
        ],
        filler: [
            "Keep a regular routine of sleep, meals and movement",
            "Notice how you feel day to day and adjust early",
            "Make time for things that calm the mind",
        ],
    },
    Lexicon {
        profile: "growth",
        domain: "your personal growth",
        area: "on your path of growth",
        spotlight: (
            Cue::AnyOf(SPROUT_CARDS),
            "In your personal growth, something new is sprouting; this is the moment to begin.",
        ),
        energized: &[
            "Your drive to learn is strong; take on something that stretches you",
            "Set a clear goal for this stage and work toward it steadily",
        ],
        energized_extra: Some((
            Cue::AnyOf(SPROUT_CARDS),
            "New growth is starting; give it daily attention while it is still fragile",
        )),
        drained: &[
            "Growth also needs pauses; digest what you have learned before taking on more",
            "Lower the pressure on yourself and keep only one goal in focus",
        ],
        drained_extra: Some((
            Cue::AnyOf(REST_CARDS),
            "This is a season for reflection, not for new starts",
        )),
        rising: "You are growing quickly; record what you learn so the progress lasts",
        falling: "Setbacks are part of growing; ask what this one is teaching you",
        falling_extra: None,
        card_notes: &[
            (&["Mentor"], "{card} shows guidance is within reach; let someone wiser help you."),
            (SPROUT_CARDS, "{card} shows growth energy starting to move."),
        ],
        card_advice: &[
            (SPROUT_CARDS, "Start now, even if small; beginnings matter more than perfection"),
            (&["Mentor"], "Seek out a mentor and ask the questions you have been holding back"),
            (&["Apprentice"], "Stay humble and learn from mistakes; they are part of the craft"),
            (&["Crossroads"], "Choose a direction that fits who you want to become, not only who you are"),
            (&["Spark"], "Follow the spark of inspiration and write it down before it fades"),
            (&["Miracle"], "An unexpected leap is possible; be ready to take it"),
        ],
        pattern_notes: &[
            (Pattern::EnergyPeak, "Your energy for growth is at a peak; push further than usual."),
            (Pattern::TurningPoint, "This is a turning point on your path; what you choose will shape who you become."),
            (Pattern::Rebirth, "From a low point a new self is emerging."),
        ],
        pattern_advice: &[
            (Pattern::Rebirth, "Let go of the old picture of yourself and make room for the new one"),
            (Pattern::Crisis, "Hard times are where growth happens; keep learning through them"),
        ],
        filler: [
            "Keep a small daily practice and review it each week",
            "Read, ask and reflect; growth comes from all three",
            "Be patient with yourself; growth is rarely a straight line",
        ],
    },
    Lexicon {
        profile: "finance",
        domain: "your finances",
        area: "with your money",
        spotlight: (
            Cue::AnyOf(WINDFALL_CARDS),
            "With your money, resources are flowing toward you; receive them wisely.",
        ),
        energized: &[
            "This is a good time to act on financial plans you have prepared well",
            "Review your investments and put idle money to work carefully",
        ],
        energized_extra: Some((
            Cue::AnyOf(WINDFALL_CARDS),
            "Money is coming in; save a share before you spend any of it",
        )),
        drained: &[
            "Hold back on big spending and keep a clear budget",
            "Build up your reserves before taking any risk",
        ],
        drained_extra: None,
        rising: "Your finances are improving; keep the discipline that got you here",
        falling: "Cut unnecessary spending and avoid high-risk moves for now",
        falling_extra: Some((
            Cue::AnyOf(RISK_CARDS),
            "Risks are close; check every deal twice and keep an emergency fund",
        )),
        card_notes: &[
            (WINDFALL_CARDS, "{card} shows resources arriving or building up."),
            (RISK_CARDS, "{card} warns of a financial risk that needs watching."),
            (&["Crossroads"], "{card} asks for a financial decision."),
        ],
        card_advice: &[
            (WINDFALL_CARDS, "Accept the resources that come, and plan how to use them before they are gone"),
            (RISK_CARDS, "Be wary of offers that look too good; read the fine print"),
            (&["Crossroads"], "Compare the options on paper before choosing; do not decide on impulse"),
            (&["Miracle"], "An unexpected gain is possible; do not build your plans on it"),
        ],
        pattern_notes: &[
            (Pattern::Concentration(Category::Variable), "Several unexpected factors act on your money at once; expect surprises."),
            (Pattern::TurningPoint, "This is a turning point for your finances; a decision now has long reach."),
        ],
        pattern_advice: &[
            (Pattern::Crisis, "Protect your essentials first and postpone anything that can wait"),
            (Pattern::Rebirth, "A financial fresh start is possible; begin with an honest budget"),
        ],
        filler: [
            "Keep a clear budget and review it monthly",
            "Spread your risk rather than betting on one thing",
            "Seek professional advice before large commitments",
        ],
    },
    Lexicon {
        profile: "social",
        domain: "your social life",
        area: "among your friends",
        spotlight: (
            Cue::FirstHumanOf(&["Mediator", "Navigator"]),
            "Among your friends, you are the one who brings people together; your role is central right now.",
        ),
        energized: &[
            "Reach out and take part; your energy draws people in",
            "Organise something that brings your friends together",
        ],
        energized_extra: Some((
            Cue::AnyOf(MEETING_CARDS),
            "A meeting is on the way; be open to new and old faces alike",
        )),
        drained: &[
            "It is fine to step back and spend time with only a few close friends",
            "Protect your energy; you do not need to attend everything",
        ],
        drained_extra: Some((
            Cue::AnyOf(&["Hermit", "Outsider"]),
            "Time alone is what you need now; the friendships will keep",
        )),
        rising: "Your circle is growing warmer; nurture the connections that matter",
        falling: "If there is friction, address it directly and kindly",
        falling_extra: Some((
            Cue::AnyOf(&["Mediator"]),
            "You can help calm the conflict; listen to both sides before you speak",
        )),
        card_notes: &[
            (&["Rival"], "{card} shows competition within your circle."),
            (&["Stranger"], "{card} shows a distance that has grown between you and others."),
            (MEETING_CARDS, "{card} brings an important social opening."),
        ],
        card_advice: &[
            (&["Mediator"], "Help others find common ground, but do not carry their quarrels for them"),
            (&["Navigator"], "Others look to you; lead by example"),
            (&["Rival"], "Keep rivalry friendly; respect wins more than victory does"),
            (MEETING_CARDS, "Say yes to the invitation; this meeting matters"),
            (&["Stranger"], "Take the first step to reconnect with someone you have drifted from"),
            (&["Gale"], "Do not feed rumours; check before you repeat anything"),
        ],
        pattern_notes: &[
            (Pattern::Concentration(Category::Human), "People dominate this reading; your relationships are the heart of the matter."),
            (Pattern::TurningPoint, "Your circle is at a turning point; who you stay close to now matters."),
            (Pattern::Crisis, "Several tensions are building at once among the people around you."),
        ],
        pattern_advice: &[
            (Pattern::Crisis, "Step back from the drama and talk one to one"),
            (Pattern::Rebirth, "An old friendship can start again; make the first move"),
        ],
        filler: [
            "Keep in touch with the people who matter, even briefly",
            "Be the friend you would like to have",
            "Balance time with others and time for yourself",
        ],
    },
    Lexicon {
        profile: "creative",
        domain: "your creative work",
        area: "in your creative work",
        spotlight: (
            Cue::AnyOf(&["Spark"]),
            "In your creative work, a spark has caught; this is the moment to make something.",
        ),
        energized: &[
            "Your creative energy is high; start the project you have been putting off",
            "Make a lot and judge later",
        ],
        energized_extra: Some((
            Cue::AnyOf(&["Spark"]),
            "Capture the idea now, while the spark is still bright",
        )),
        drained: &[
            "Fill the well: look, read and listen before you try to make anything",
            "Lower the bar and make something small every day",
        ],
        drained_extra: Some((
            Cue::AnyOf(&["Drought"]),
            "A dry spell is part of the cycle; change your surroundings to break it",
        )),
        rising: "Your work is finding its audience; keep showing it",
        falling: "Creative blocks pass; change the medium or the routine for a while",
        falling_extra: None,
        card_notes: &[
            (&["Spark"], "{card} shows inspiration arriving."),
            (&["Drought"], "{card} warns of creative exhaustion."),
        ],
        card_advice: &[
            (&["Spark"], "Write the idea down at once and sketch the first version today"),
            (&["Drought"], "Rest your creative muscles and take in new material"),
            (&["Rebel"], "Break a rule on purpose and see what it opens up"),
            (&["Miracle"], "An unexpected breakthrough is possible; be at your desk when it comes"),
            (&["Theater"], "Show your work; an audience will sharpen it"),
        ],
        pattern_notes: &[
            (Pattern::EnergyPeak, "Your creative energy is at a peak; make the most ambitious piece you can."),
            (Pattern::TurningPoint, "Your creative direction is at a turning point; choose the work you truly want to make."),
        ],
        pattern_advice: &[
            (Pattern::Rebirth, "Start a new body of work rather than reworking the old"),
            (Pattern::Crisis, "Turn the pressure into material; hard times make strong work"),
        ],
        filler: [
            "Keep a notebook for ideas and review it each week",
            "Protect a fixed time for making things",
            "Share work in progress with someone you trust",
        ],
    },
    Lexicon {
        profile: "decision",
        domain: "this decision",
        area: "in this choice",
        spotlight: (
            Cue::AnyOf(&["Crossroads"]),
            "On this decision, you stand at a crossroads; the choice is truly yours to make.",
        ),
        energized: &[
            "You have the energy to act on your decision; do it while the momentum lasts",
            "Gather the facts quickly, then commit",
        ],
        energized_extra: Some((
            Cue::AnyOf(&["Navigator"]),
            "Trust your sense of direction; you have led well before",
        )),
        drained: &[
            "Do not decide while exhausted; rest first",
            "Give yourself a deadline, but not today",
        ],
        drained_extra: Some((
            Cue::AnyOf(REST_CARDS),
            "Waiting is a valid choice for now",
        )),
        rising: "The odds are in your favour; decide and move",
        falling: "Weigh the downside carefully before committing",
        falling_extra: Some((
            Cue::AnyOf(&["Trap"]),
            "Something is not what it seems; look for the hidden cost",
        )),
        card_notes: &[
            (&["Crossroads"], "{card} shows the moment of choice has come."),
            (RISK_CARDS, "{card} warns of a risk hidden in one of the options."),
            (&["Miracle", "Gift"], "{card} shows an opening in one of the paths."),
        ],
        card_advice: &[
            (&["Crossroads"], "List every option and what each one costs you"),
            (RISK_CARDS, "Check for hidden risks before you sign anything"),
            (&["Miracle", "Gift"], "Take the opening, but understand what it asks of you"),
            (&["Navigator"], "Ask someone you trust to challenge your reasoning"),
        ],
        pattern_notes: &[
            (Pattern::TurningPoint, "This decision is a real turning point; it will shape what follows for a long time."),
            (Pattern::Crisis, "Pressure is high; decide slowly even if others push you."),
        ],
        pattern_advice: &[
            (Pattern::Crisis, "Under pressure, choose the option you can undo"),
            (Pattern::Rebirth, "This choice can be a fresh start; choose for the future, not the past"),
        ],
        filler: [
            "Write down what matters most to you, then check each option against it",
            "Sleep on it before committing",
            "Ask for the view of someone not involved",
        ],
    },
];

/// The lexicon of a built-in profile, if it has one.
pub fn lexicon_for(profile_id: &str) -> Option<&'static Lexicon> {
    LEXICONS.iter().find(|l| l.profile == profile_id)
}
