use std::sync::atomic::{AtomicUsize, Ordering};
use train_shared::Section;

/// Decides which section a newly purchased seat is placed in.
///
/// Called once per purchase while the store lock is held, so implementations
/// must be cheap and must not block.
pub trait SectionPolicy: Send + Sync {
    fn choose(&self) -> Section;
}

impl<F> SectionPolicy for F
where
    F: Fn() -> Section + Send + Sync,
{
    fn choose(&self) -> Section {
        self()
    }
}

/// Uniform, independent draw per purchase. No balancing.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSections;

impl SectionPolicy for RandomSections {
    fn choose(&self) -> Section {
        use rand::Rng;
        if rand::thread_rng().gen_bool(0.5) {
            Section::A
        } else {
            Section::B
        }
    }
}

/// Always the same section
#[derive(Debug, Clone, Copy)]
pub struct FixedSection(pub Section);

impl SectionPolicy for FixedSection {
    fn choose(&self) -> Section {
        self.0
    }
}

/// A, B, A, B, ... starting from section A
#[derive(Debug, Default)]
pub struct AlternatingSections {
    next: AtomicUsize,
}

impl SectionPolicy for AlternatingSections {
    fn choose(&self) -> Section {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Section::ALL[n % Section::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_policy() {
        let policy = AlternatingSections::default();
        let picks: Vec<Section> = (0..4).map(|_| policy.choose()).collect();
        assert_eq!(picks, vec![Section::A, Section::B, Section::A, Section::B]);
    }

    #[test]
    fn test_random_policy_hits_both_sections() {
        let policy = RandomSections;
        let picks: Vec<Section> = (0..500).map(|_| policy.choose()).collect();

        // Probability of missing one side in 500 fair draws is ~2^-499
        assert!(picks.contains(&Section::A));
        assert!(picks.contains(&Section::B));
    }

    #[test]
    fn test_closure_policy() {
        let policy = || Section::B;
        assert_eq!(policy.choose(), Section::B);
        assert_eq!(FixedSection(Section::A).choose(), Section::A);
    }
}
