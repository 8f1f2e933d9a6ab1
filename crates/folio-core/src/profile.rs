//! Page content: owner profile, skills and the in-page sections.

use std::fmt;

/// Top-level page section, addressable by anchor
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Sections in page order
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section (anchor without `#`)
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Navigation link text
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Accepts `about` as well as `#about`
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.anchor())
    }
}

/// A skill card with its progress level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub icon: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// 0..=100
    pub level: u8,
}

impl Skill {
    /// Element id used to observe the card
    pub fn anchor(&self) -> String {
        let slug: String = self
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        format!("skill-{slug}")
    }
}

pub static SKILLS: &[Skill] = &[
    Skill { icon: "\u{269B}\u{FE0F}", name: "React", category: "Frontend Framework", level: 90 },
    Skill { icon: "\u{1F3A8}", name: "CSS3", category: "Styling", level: 95 },
    Skill { icon: "\u{1F4F1}", name: "Responsive Design", category: "Design", level: 88 },
    Skill { icon: "\u{1F680}", name: "JavaScript", category: "Programming", level: 85 },
    Skill { icon: "\u{1F3AF}", name: "Figma", category: "Design Tools", level: 80 },
    Skill { icon: "\u{1F310}", name: "Node.js", category: "Backend", level: 75 },
];

/// External profile link in the footer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Everything the static sections render about the owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub availability: &'static [&'static str],
    pub contact_blurb: &'static str,
    pub socials: &'static [SocialLink],
    pub copyright_year: u16,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Footer copyright line
    pub fn copyright(&self) -> String {
        format!("\u{00A9} {} {}. All rights reserved.", self.copyright_year, self.name)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Evan Gray",
    title: "Businessman",
    tagline: "Making incredible slides by day, incredible parties by night",
    about: "I'm Evan and I create shareholder value.",
    location: "Berkeley, CA",
    email: "evan_gray@berkeley.edu",
    phone: "(702) 419-9668",
    availability: &["Freelance", "Full-Time", "Remote"],
    contact_blurb: "I'm always interested in hearing about new opportunities and projects. \
                    Feel free to reach out!",
    socials: &[
        SocialLink { label: "GitHub", url: "#" },
        SocialLink { label: "LinkedIn", url: "#" },
        SocialLink { label: "Twitter", url: "#" },
        SocialLink { label: "Dribbble", url: "#" },
    ],
    copyright_year: 2025,
};
