//! Interface labels in the supported languages.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

/// Every translated string shown by the interface.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub nav_home: &'static str,
    pub nav_sim: &'static str,
    pub nav_quiz: &'static str,
    pub nav_myth: &'static str,
    pub welcome: &'static str,
    pub intro: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
    pub sim_title: &'static str,
    pub sim_desc: &'static str,
    pub state_sel: &'static str,
    pub turnout_sel: &'static str,
    pub calc_save: &'static str,
    pub quiz_title: &'static str,
    pub check_btn: &'static str,
    pub source: &'static str,
}

static ENGLISH: Labels = Labels {
    title: "One Nation One Election: Voter Hub",
    subtitle: "Neutral • Educational • Data-Driven",
    nav_home: "Home & Explainers",
    nav_sim: "Impact Simulator",
    nav_quiz: "Voter Quiz",
    nav_myth: "Myth Buster",
    welcome: "Welcome to the ONOE Voter Hub",
    intro: "A student-led initiative to explain the 'One Nation One Election' proposal using data and facts.",
    pros: "Potential Benefits",
    cons: "Potential Challenges",
    sim_title: "Policy Impact Simulator",
    sim_desc: "Adjust the parameters to see how ONOE could affect costs and voter turnout in your state.",
    state_sel: "Select State",
    turnout_sel: "Projected Turnout Change (%)",
    calc_save: "Calculate Savings",
    quiz_title: "Test Your Knowledge",
    check_btn: "Check Fact",
    source: "Source",
};

static HINDI: Labels = Labels {
    title: "एक देश एक चुनाव: वोटर हब",
    subtitle: "निष्पक्ष • शैक्षिक • डेटा-संचालित",
    nav_home: "मुख्य पृष्ठ",
    nav_sim: "प्रभाव सिम्युलेटर",
    nav_quiz: "प्रश्नोत्तरी",
    nav_myth: "मिथक निवारण",
    welcome: "ONOE वोटर हब में आपका स्वागत है",
    intro: "डेटा और तथ्यों का उपयोग करके 'एक देश एक चुनाव' प्रस्ताव को समझाने की एक छात्र पहल।",
    pros: "संभावित लाभ",
    cons: "संभावित चुनौतियां",
    sim_title: "नीति प्रभाव सिम्युलेटर",
    sim_desc: "यह देखने के लिए मान समायोजित करें कि ONOE आपके राज्य में लागत और मतदान को कैसे प्रभावित कर सकता है।",
    state_sel: "राज्य चुनें",
    turnout_sel: "अनुमानित मतदान परिवर्तन (%)",
    calc_save: "बचत की गणना करें",
    quiz_title: "अपना ज्ञान परखें",
    check_btn: "तथ्य जांचें",
    source: "स्रोत",
};

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}

impl Labels {
    pub fn page_title(&self, page: Page) -> &'static str {
        match page {
            Page::Home => self.nav_home,
            Page::Simulator => self.nav_sim,
            Page::Myths => self.nav_myth,
            Page::Quiz => self.nav_quiz,
        }
    }
}
