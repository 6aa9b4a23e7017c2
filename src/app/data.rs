//! Shared immutable site content. Plain constant tables, no runtime state.

pub struct SiteConfig {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

pub static SITE: SiteConfig = SiteConfig {
    name: "Md Ismail",
    role: "Full Stack Developer",
    description: "Motivated and versatile developer, always eager to take on new challenges. \
                  Passionate about learning and dedicated to delivering high-quality results.",
    email: "mdismaeelkhan345@gmail.com",
    location: "Remote",
};

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 7] = [
    NavLink { name: "About", href: "/" },
    NavLink { name: "Skills", href: "/skills" },
    NavLink { name: "Projects", href: "/projects" },
    NavLink { name: "Experience", href: "/experience" },
    NavLink { name: "Blog", href: "/blog" },
    NavLink { name: "Contact", href: "/contact" },
    NavLink { name: "Meet", href: "/meet" },
];

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        href: "https://github.com/md-ismaeel",
        icon: "devicon-github-plain",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/md-ismaeel",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        name: "Twitter",
        href: "https://twitter.com/impossibel_br0",
        icon: "devicon-twitter-original",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    pub category: SkillCategory,
}

pub static SKILLS: [Skill; 12] = [
    Skill { name: "Rust", level: 85, category: SkillCategory::Backend },
    Skill { name: "TypeScript", level: 90, category: SkillCategory::Frontend },
    Skill { name: "React", level: 92, category: SkillCategory::Frontend },
    Skill { name: "Leptos", level: 80, category: SkillCategory::Frontend },
    Skill { name: "Tailwind CSS", level: 88, category: SkillCategory::Frontend },
    Skill { name: "Node.js", level: 86, category: SkillCategory::Backend },
    Skill { name: "Axum", level: 78, category: SkillCategory::Backend },
    Skill { name: "Express", level: 84, category: SkillCategory::Backend },
    Skill { name: "PostgreSQL", level: 82, category: SkillCategory::Database },
    Skill { name: "MongoDB", level: 80, category: SkillCategory::Database },
    Skill { name: "Git", level: 90, category: SkillCategory::Tools },
    Skill { name: "Docker", level: 75, category: SkillCategory::Tools },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    FullStack,
    Design,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::FullStack => "Full Stack",
            ProjectCategory::Design => "Design",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub featured: bool,
    pub category: ProjectCategory,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Portfolio Site",
        description: "This site - a server-rendered, WASM-hydrated single-page portfolio with \
                      client-side routing, theme switching, and a validated contact form.",
        technologies: &["Rust", "Leptos", "Axum", "Tailwind CSS"],
        github_url: Some("https://github.com/md-ismaeel/portfolio-site"),
        live_url: None,
        featured: true,
        category: ProjectCategory::FullStack,
    },
    Project {
        title: "Shop Sphere",
        description: "E-commerce storefront with cart, checkout, and order tracking.",
        technologies: &["React", "Node.js", "MongoDB", "Express"],
        github_url: Some("https://github.com/md-ismaeel/shop-sphere"),
        live_url: Some("https://shop-sphere.example.com"),
        featured: true,
        category: ProjectCategory::FullStack,
    },
    Project {
        title: "Weather Now",
        description: "Location-aware weather dashboard with hourly and weekly forecasts.",
        technologies: &["TypeScript", "React", "Tailwind CSS"],
        github_url: Some("https://github.com/md-ismaeel/weather-now"),
        live_url: Some("https://weather-now.example.com"),
        featured: false,
        category: ProjectCategory::Web,
    },
    Project {
        title: "Design System",
        description: "Reusable component library and design tokens shared across projects.",
        technologies: &["Figma", "React", "Storybook"],
        github_url: None,
        live_url: None,
        featured: false,
        category: ProjectCategory::Design,
    },
];

pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub current: bool,
}

pub static EXPERIENCES: [Experience; 3] = [
    Experience {
        company: "Acme Labs",
        position: "Full Stack Developer",
        duration: "2024 - Present",
        description: &[
            "Own the customer-facing web stack end to end, from API design to UI delivery.",
            "Cut page weight 40% by moving interactive widgets to server-rendered WASM islands.",
        ],
        technologies: &["Rust", "Leptos", "PostgreSQL"],
        current: true,
    },
    Experience {
        company: "Brightline Studio",
        position: "Frontend Developer",
        duration: "2022 - 2024",
        description: &[
            "Built and maintained client SPAs with shared component libraries.",
            "Introduced end-to-end tests that caught regressions before every release.",
        ],
        technologies: &["React", "TypeScript", "Tailwind CSS"],
        current: false,
    },
    Experience {
        company: "Freelance",
        position: "Web Developer",
        duration: "2021 - 2022",
        description: &["Delivered marketing sites and small web apps for local businesses."],
        technologies: &["JavaScript", "Node.js", "MongoDB"],
        current: false,
    },
];

pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub featured: bool,
}

pub static BLOG_POSTS: [BlogPost; 4] = [
    BlogPost {
        title: "Getting Started with Modern Web Development",
        excerpt: "Learn the fundamentals of building beautiful, responsive websites with the \
                  latest technologies and best practices.",
        author: "Sarah Johnson",
        date: "Jan 15, 2026",
        read_time: "5 min read",
        category: "Development",
        featured: true,
    },
    BlogPost {
        title: "The Future of AI in Web Design",
        excerpt: "Exploring how artificial intelligence is revolutionizing the way we approach \
                  user experience and interface design.",
        author: "Michael Chen",
        date: "Jan 12, 2026",
        read_time: "8 min read",
        category: "AI & Design",
        featured: true,
    },
    BlogPost {
        title: "Building Scalable React Applications",
        excerpt: "Best practices and architecture patterns for creating maintainable React apps \
                  that can grow with your business.",
        author: "Emily Rodriguez",
        date: "Jan 10, 2026",
        read_time: "12 min read",
        category: "React",
        featured: false,
    },
    BlogPost {
        title: "CSS Grid vs Flexbox: When to Use Each",
        excerpt: "A comprehensive guide to understanding the differences and use cases for CSS \
                  Grid and Flexbox layouts.",
        author: "David Kim",
        date: "Jan 8, 2026",
        read_time: "6 min read",
        category: "CSS",
        featured: false,
    },
];
