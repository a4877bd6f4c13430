//! Template pools: pick one entry at random, then fill its placeholders.

use tj_deck::RandomSource;

/// Pick one template uniformly from `pool`. An empty pool yields `""`.
pub fn pick<'a>(pool: &[&'a str], rng: &mut dyn RandomSource) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    pool[rng.pick_index(pool.len())]
}

/// Replace each `{key}` in `template` with its value.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// Pick from `pool` and fill the result.
pub fn pick_filled(pool: &[&str], vars: &[(&str, &str)], rng: &mut dyn RandomSource) -> String {
    fill(pick(pool, rng), vars)
}

/// Drop a trailing sentence terminator so a text can be embedded mid-sentence.
pub(crate) fn clause(text: &str) -> &str {
    text.trim().trim_end_matches(['.', '?', '!'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_deck::ScriptedSource;

    #[test]
    fn fill_replaces_every_occurrence() {
        let out = fill("{card} and {card} in {area}", &[("card", "Gale"), ("area", "work")]);
        assert_eq!(out, "Gale and Gale in work");
    }

    #[test]
    fn fill_leaves_unknown_keys() {
        assert_eq!(fill("{x} stays", &[("y", "z")]), "{x} stays");
    }

    #[test]
    fn pick_follows_source() {
        let pool = ["a", "b", "c", "d"];
        let mut src = ScriptedSource::new(vec![0.0, 0.99, 0.5]);
        assert_eq!(pick(&pool, &mut src), "a");
        assert_eq!(pick(&pool, &mut src), "d");
        assert_eq!(pick(&pool, &mut src), "c");
        assert_eq!(pick(&[], &mut src), "");
    }

    #[test]
    fn clause_strips_terminator() {
        assert_eq!(clause("What are you waiting for?"), "What are you waiting for");
        assert_eq!(clause("Keep going. "), "Keep going");
    }
}
