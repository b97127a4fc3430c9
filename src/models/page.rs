/// Top-level pages of the dashboard, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Simulator,
    Myths,
    Quiz,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Simulator, Page::Myths, Page::Quiz];

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn position(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Simulator => 1,
            Page::Myths => 2,
            Page::Quiz => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(Page::Quiz.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Quiz);
        assert_eq!(Page::Home.next().next(), Page::Myths);
    }
}
