//! Grade distributions: how many students received each letter.

/// Number of students who received a single letter grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeCount {
    pub letter: String,
    pub count: u32,
}

/// An ordered list of letter counts, best grade first.
///
/// This is the configuration value a [`CutoffTable`](crate::cutoff::CutoffTable)
/// is built from. The order of `grades` is the order of the cutoffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub name: String,
    pub grades: Vec<GradeCount>,
}

/// Letter counts for CS 161, Spring 2014, best grade first.
static CS161_SPRING_2014: &[(&str, u32)] = &[
    ("A+", 6),
    ("A", 73),
    ("A-", 8),
    ("B+", 67),
    ("B", 83),
    ("B-", 38),
    ("C+", 41),
    ("C", 23),
    ("C-", 2),
    ("D", 6),
    ("F", 5),
];

impl Distribution {
    pub fn new<I, L>(name: impl Into<String>, grades: I) -> Self
    where
        I: IntoIterator<Item = (L, u32)>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            grades: grades
                .into_iter()
                .map(|(letter, count)| GradeCount {
                    letter: letter.into(),
                    count,
                })
                .collect(),
        }
    }

    /// The built-in distribution used by the command-line tool.
    pub fn cs161_spring_2014() -> Self {
        Self::new("CS 161 Spring 2014", CS161_SPRING_2014.iter().copied())
    }

    /// Sum of all counts, widened so large classes cannot overflow.
    pub fn total(&self) -> u64 {
        self.grades.iter().map(|g| u64::from(g.count)).sum()
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::cs161_spring_2014()
    }
}
