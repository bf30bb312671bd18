//! Scroll reveal, skill-bar fill and stat counter.
//!
//! These are fire-and-forget: the session schedules them on its timeline and
//! nothing cancels them. A counter whose section was re-rendered in the
//! meantime notices the generation change and stops quietly.

use std::time::Duration;

use crate::dom::{Document, Element, Selector};
use crate::render::STATS_SECTION;

pub const REVEAL_DELAY: Duration = Duration::from_millis(100);
pub const SECTION_ANIMATION_DELAY: Duration = Duration::from_millis(300);
pub const SKILL_FILL_DELAY: Duration = Duration::from_millis(100);
const COUNTER_DURATION_SECS: f64 = 1.5;
const COUNTER_STEPS: u64 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Scroll reveal
// ────────────────────────────────────────────────────────────────────────────

/// Marks every not-yet-revealed `.reveal` element on the active page as
/// `revealed`. Elements on hidden pages do not intersect the viewport and are
/// left for a later pass. Revealed elements are never touched again.
pub fn reveal_pass(doc: &mut Document) -> usize {
    let mut revealed = 0;
    doc.for_each_mut(&Selector::Attr("data-page"), |page| {
        if !page.has_class("active") {
            return;
        }
        page.for_each_mut(&Selector::Class("reveal"), &mut |el| {
            if !el.has_class("revealed") {
                el.add_class("revealed");
                revealed += 1;
            }
        });
    });
    revealed
}

// ────────────────────────────────────────────────────────────────────────────
// Skill bars
// ────────────────────────────────────────────────────────────────────────────

pub fn reset_skill_bars(doc: &mut Document) {
    doc.for_each_mut(&Selector::Class("skill-progress-fill"), |fill| {
        if fill.attr("data-width").is_some() {
            fill.set_attr("style", "width: 0%");
        }
    });
}

pub fn fill_skill_bars(doc: &mut Document) {
    doc.for_each_mut(&Selector::Class("skill-progress-fill"), |fill| {
        if let Some(width) = fill.attr("data-width").map(str::to_string) {
            fill.set_attr("style", format!("width: {width}%"));
        }
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Stat counter
// ────────────────────────────────────────────────────────────────────────────

/// One in-flight count-up of a single stat.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRun {
    pub index: usize,
    pub current: u64,
    pub target: u64,
    pub increment: u64,
    pub step: Duration,
    /// Generation of the stats container when the run started.
    pub generation: u64,
}

/// `(increment, step)` so a count reaches `target` in about 1.5 s.
pub fn counter_plan(target: u64) -> (u64, Duration) {
    let increment = (target / COUNTER_STEPS).max(1);
    let steps = target as f64 / increment as f64;
    let step = if steps > 0.0 {
        Duration::from_secs_f64(COUNTER_DURATION_SECS / steps)
    } else {
        Duration::ZERO
    };
    (increment, step)
}

/// Leading digits of a count, after whitespace and an optional `+`:
/// `"50+"` counts to 50 and `"90.5"` to 90.
fn leading_count(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Resets every stat to `0` and returns one run per stat with a numeric
/// target. Stats whose `data-count` has no leading integer are left alone.
pub fn start_stats(doc: &mut Document) -> Vec<StatRun> {
    let generation = doc.generation(STATS_SECTION);
    let mut runs = Vec::new();

    let Some(section) = doc.query_mut(&Selector::Id(STATS_SECTION)) else {
        return runs;
    };
    let mut index = 0;
    section.for_each_mut(&Selector::Class("stat-number"), &mut |stat| {
        let target = stat.attr("data-count").and_then(leading_count);
        if let Some(target) = target {
            stat.set_text("0");
            let (increment, step) = counter_plan(target);
            runs.push(StatRun {
                index,
                current: 0,
                target,
                increment,
                step,
                generation,
            });
        }
        index += 1;
    });
    runs
}

/// Advances `run` by one step and writes the value. Returns the follow-up run,
/// or `None` once the target is displayed (or the element is gone).
pub fn stat_tick(doc: &mut Document, run: StatRun) -> Option<StatRun> {
    if doc.generation(STATS_SECTION) != run.generation {
        return None;
    }

    let current = run.current.saturating_add(run.increment).min(run.target);
    let written = with_nth_stat(doc, run.index, |stat| stat.set_text(current.to_string()));
    if !written || current >= run.target {
        return None;
    }
    Some(StatRun { current, ..run })
}

fn with_nth_stat(doc: &mut Document, index: usize, f: impl FnOnce(&mut Element)) -> bool {
    let Some(section) = doc.query_mut(&Selector::Id(STATS_SECTION)) else {
        return false;
    };
    let mut seen = 0;
    let mut f = Some(f);
    section.for_each_mut(&Selector::Class("stat-number"), &mut |stat| {
        if seen == index {
            if let Some(f) = f.take() {
                f(stat);
            }
        }
        seen += 1;
    });
    f.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteProfile;
    use crate::content::models::{About, Stat};
    use crate::render::about::render_about;
    use crate::view::shell::build_shell;

    fn doc_with_stats(counts: &[impl ToString]) -> Document {
        let mut doc = build_shell(&SiteProfile::default());
        let about = About {
            stats: Some(
                counts
                    .iter()
                    .map(|count| Stat {
                        count: count.to_string(),
                        label: "x".into(),
                    })
                    .collect(),
            ),
            ..Default::default()
        };
        render_about(&mut doc, Some(&about));
        doc
    }

    fn displayed(doc: &Document) -> Vec<String> {
        doc.query_all(&Selector::Class("stat-number"))
            .iter()
            .map(|s| s.text_content())
            .collect()
    }

    fn run_to_end(doc: &mut Document, mut run: StatRun) -> Vec<u64> {
        let mut seen = Vec::new();
        loop {
            let next = stat_tick(doc, run.clone());
            seen.push(displayed(doc)[run.index].parse().unwrap());
            match next {
                Some(n) => run = n,
                None => return seen,
            }
        }
    }

    #[test]
    fn test_counter_plan_for_ninety() {
        let (increment, step) = counter_plan(90);
        assert_eq!(increment, 3);
        assert_eq!(step, Duration::from_millis(50));
    }

    #[test]
    fn test_ninety_ends_exactly_at_ninety_without_overshoot() {
        let mut doc = doc_with_stats(&[90]);
        let runs = start_stats(&mut doc);
        assert_eq!(displayed(&doc), vec!["0"]);

        let seen = run_to_end(&mut doc, runs[0].clone());
        assert_eq!(*seen.last().unwrap(), 90);
        assert!(seen.iter().all(|&v| v <= 90));
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_uneven_target_clamps_last_step() {
        let mut doc = doc_with_stats(&[95]);
        let runs = start_stats(&mut doc);
        let seen = run_to_end(&mut doc, runs[0].clone());
        assert_eq!(*seen.last().unwrap(), 95);
        assert!(seen.iter().all(|&v| v <= 95));
    }

    #[test]
    fn test_largest_target_ends_exactly_without_overflow() {
        let mut doc = doc_with_stats(&[u64::MAX]);
        let runs = start_stats(&mut doc);
        let seen = run_to_end(&mut doc, runs[0].clone());
        assert_eq!(seen.len(), 31);
        assert_eq!(*seen.last().unwrap(), u64::MAX);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_counts_use_their_leading_integer() {
        let mut doc = doc_with_stats(&["50+", "90.0", " 12 ", "many", ""]);
        let runs = start_stats(&mut doc);
        let targets: Vec<(usize, u64)> = runs.iter().map(|r| (r.index, r.target)).collect();
        assert_eq!(targets, vec![(0, 50), (1, 90), (2, 12)]);

        let seen = run_to_end(&mut doc, runs[0].clone());
        assert_eq!(*seen.last().unwrap(), 50);
        // unparsable counts keep their initial text
        assert_eq!(displayed(&doc)[3], "0");
    }

    #[test]
    fn test_zero_target_finishes_on_first_tick() {
        let mut doc = doc_with_stats(&[0]);
        let runs = start_stats(&mut doc);
        assert!(stat_tick(&mut doc, runs[0].clone()).is_none());
        assert_eq!(displayed(&doc), vec!["0"]);
    }

    #[test]
    fn test_rerendered_section_stops_stale_run() {
        let mut doc = doc_with_stats(&[90]);
        let runs = start_stats(&mut doc);
        let mut doc2 = doc.clone();
        render_about(
            &mut doc2,
            Some(&About {
                stats: Some(vec![Stat {
                    count: "5".into(),
                    label: "y".into(),
                }]),
                ..Default::default()
            }),
        );
        assert!(stat_tick(&mut doc2, runs[0].clone()).is_none());
        assert_eq!(displayed(&doc2), vec!["0"]);
    }

    #[test]
    fn test_reveal_only_touches_active_page_once() {
        let mut doc = doc_with_stats(&[1, 2]);
        assert_eq!(reveal_pass(&mut doc), 2);
        assert_eq!(reveal_pass(&mut doc), 0);
    }

    #[test]
    fn test_skill_bars_reset_then_fill() {
        let mut doc = Document::new(
            Element::new("html").child(
                Element::new("div")
                    .class("skill-progress-fill")
                    .attr_with("data-width", "80"),
            ),
        );
        reset_skill_bars(&mut doc);
        let fill = |d: &Document| {
            d.query(&Selector::Class("skill-progress-fill"))
                .unwrap()
                .attr("style")
                .unwrap()
                .to_string()
        };
        assert_eq!(fill(&doc), "width: 0%");
        fill_skill_bars(&mut doc);
        assert_eq!(fill(&doc), "width: 80%");
    }
}
