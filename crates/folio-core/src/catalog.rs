//! Project catalogue and category filtering.

use std::fmt;

/// Category a project is filed under
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ProjectCategory {
    Frontend,
    Fullstack,
    Design,
    Webapp,
}

impl ProjectCategory {
    pub fn all() -> &'static [ProjectCategory] {
        &[
            ProjectCategory::Frontend,
            ProjectCategory::Fullstack,
            ProjectCategory::Design,
            ProjectCategory::Webapp,
        ]
    }

    /// Stable key used for filter buttons and card attributes
    pub fn key(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Fullstack => "fullstack",
            ProjectCategory::Design => "design",
            ProjectCategory::Webapp => "webapp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Fullstack => "Full-Stack",
            ProjectCategory::Design => "Design",
            ProjectCategory::Webapp => "Web App",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }
}

/// Active filter of the projects grid
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Every filter in button order
    pub fn all() -> Vec<ProjectFilter> {
        std::iter::once(ProjectFilter::All)
            .chain(ProjectCategory::all().iter().copied().map(ProjectFilter::Category))
            .collect()
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(c) => c.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Category(c) => c.label(),
        }
    }

    /// Parse a filter key; unknown keys yield `None`
    pub fn parse(key: &str) -> Option<Self> {
        if key == "all" {
            return Some(ProjectFilter::All);
        }
        ProjectCategory::from_key(key).map(ProjectFilter::Category)
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.category == *c,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One card in the projects grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

/// The catalogue, in display order
pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        category: ProjectCategory::Fullstack,
        description: "A modern e-commerce platform built with React and Node.js, featuring \
                      shopping cart, payment integration, and admin dashboard.",
        image_url: "https://images.pexels.com/photos/1563399/pexels-photo-1563399.jpeg",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        featured: true,
    },
    Project {
        title: "Weather Dashboard",
        category: ProjectCategory::Frontend,
        description: "Clean and intuitive weather dashboard with location search, 7-day \
                      forecast, and beautiful animations.",
        image_url: "https://images.pexels.com/photos/1563301/pexels-photo-1563301.jpeg",
        tags: &["JavaScript", "CSS3", "API"],
        featured: false,
    },
    Project {
        title: "Task Management App",
        category: ProjectCategory::Webapp,
        description: "Productivity app with drag-and-drop functionality, project \
                      collaboration, and deadline tracking.",
        image_url: "https://images.pexels.com/photos/1563356/pexels-photo-1563356.jpeg",
        tags: &["React", "TypeScript", "Firebase"],
        featured: false,
    },
    Project {
        title: "Creative Portfolio",
        category: ProjectCategory::Design,
        description: "Responsive portfolio website for a graphic designer with interactive \
                      galleries and smooth animations.",
        image_url: "https://images.pexels.com/photos/1563311/pexels-photo-1563311.jpeg",
        tags: &["HTML5", "CSS3", "GSAP"],
        featured: false,
    },
];

/// Projects passing `filter`, catalogue order preserved
pub fn visible_projects(filter: ProjectFilter) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| filter.matches(p))
}
