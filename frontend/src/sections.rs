/// In-page destinations shared by the navigation bar and the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Generator,
    Roadmap,
    Pricing,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Generator, Anchor::Roadmap, Anchor::Pricing];

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Generator => "Generator",
            Anchor::Roadmap => "Roadmap",
            Anchor::Pricing => "Pricing",
        }
    }

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Generator => "generator",
            Anchor::Roadmap => "roadmap",
            Anchor::Pricing => "pricing",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    #[cfg(test)]
    pub fn from_label(label: &str) -> Option<Anchor> {
        Self::ALL.into_iter().find(|anchor| anchor.label() == label)
    }
}
