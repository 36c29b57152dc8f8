//! The read-only content bundle backing every section of the page.
//!
//! Records are loaded once at startup and never mutated; components only
//! ever borrow out of [`site`].

use std::sync::LazyLock;

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub stats: Stats,
    pub contact: ContactChannels,
}

#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub total_sales: u64,
    pub clients_served: u64,
    pub years_experience: u64,
    pub projects_completed: u64,
}

impl Stats {
    /// `$4.0M+` for 4_000_000 — millions with one decimal place.
    pub fn sales_display(sales: u64) -> String {
        format!("${:.1}M+", sales as f64 / 1_000_000.0)
    }

    /// `500+`, `8+`, ... — the plain count display used by every other stat.
    pub fn count_display(value: u64) -> String {
        format!("{value}+")
    }
}

#[derive(Debug, Clone)]
pub struct ContactChannels {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub upwork: &'static str,
}

#[derive(Debug, Clone)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
}

#[derive(Debug, Clone)]
pub struct ExperienceEntry {
    pub id: u32,
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    ECommerce,
    Amazon,
    Development,
    Branding,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::ECommerce,
        ProjectCategory::Amazon,
        ProjectCategory::Development,
        ProjectCategory::Branding,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::ECommerce => "E-commerce",
            ProjectCategory::Amazon => "Amazon",
            ProjectCategory::Development => "Development",
            ProjectCategory::Branding => "Branding",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    /// Result-metric name → display string, in presentation order.
    pub results: &'static [(&'static str, &'static str)],
    pub technologies: &'static [&'static str],
}

/// Portfolio filter selection: the sentinel `All` or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => project.category == *c,
        }
    }
}

/// Narrows `projects` to the current selection, preserving input order.
/// `All` yields the full list.
pub fn filter_projects<'a>(projects: &'a [Project], filter: CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: u32,
    pub author: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// "Sarah Johnson" -> "SJ", used for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillRating {
    pub name: &'static str,
    pub level: u8,
}

/// Service-interest options offered by the contact form.
pub const SERVICE_OPTIONS: [&str; 6] = [
    "Business Consulting",
    "Shopify Store Development",
    "Amazon Store Setup",
    "Brand Design",
    "E-commerce Training",
    "Other",
];

#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: Profile,
    pub services: Vec<Service>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub skills: Vec<SkillRating>,
}

static SITE: LazyLock<SiteContent> = LazyLock::new(|| SiteContent {
    profile: Profile {
        name: "Sohaib Mushtaq",
        tagline: "Entrepreneur / 6-Figure Shopify & Amazon Seller / E-commerce Trainer",
        bio: "With over $4M+ in sales generated across multiple platforms, I help brands and startups build profitable e-commerce businesses. As a Top Rated Plus freelancer on Upwork, I've guided countless businesses from concept to 6-figure success stories.",
        stats: Stats {
            total_sales: 4_000_000,
            clients_served: 500,
            years_experience: 8,
            projects_completed: 750,
        },
        contact: ContactChannels {
            email: "sohaib@example.com",
            phone: "+1 (555) 123-4567",
            location: "Remote Worldwide",
            linkedin: "https://linkedin.com/in/sohaibmushtaq",
            upwork: "https://upwork.com/freelancers/sohaibmushtaq",
        },
    },
    services: vec![
        Service {
            id: 1,
            title: "Business Consulting",
            description: "Strategic guidance for scaling your e-commerce business from startup to 6-figures",
            icon: "💼",
            features: &["Market Analysis", "Business Strategy", "Growth Planning", "Revenue Optimization"],
            price: "Starting at $150/hour",
        },
        Service {
            id: 2,
            title: "Shopify Store Development",
            description: "Custom Shopify stores designed to convert visitors into customers",
            icon: "🛍️",
            features: &["Custom Design", "App Integration", "Performance Optimization", "Mobile Responsive"],
            price: "Starting at $2,500",
        },
        Service {
            id: 3,
            title: "Amazon Store Setup",
            description: "Complete Amazon seller account setup and optimization for maximum visibility",
            icon: "📦",
            features: &["Account Setup", "Product Listing", "SEO Optimization", "PPC Management"],
            price: "Starting at $1,200",
        },
        Service {
            id: 4,
            title: "Brand Design",
            description: "Professional brand identity design that resonates with your target audience",
            icon: "🎨",
            features: &["Logo Design", "Brand Guidelines", "Marketing Materials", "Social Media Assets"],
            price: "Starting at $800",
        },
    ],
    experience: vec![
        ExperienceEntry {
            id: 1,
            company: "Amazon Solutions Pro",
            position: "Senior E-commerce Consultant",
            duration: "2021 - Present",
            description: "Leading e-commerce strategy for enterprise clients, generating $2M+ in additional revenue",
            achievements: &[
                "Increased client revenue by 150% on average",
                "Managed 50+ Amazon seller accounts",
                "Developed automated inventory management systems",
            ],
        },
        ExperienceEntry {
            id: 2,
            company: "Extreme Commerce",
            position: "Lead Shopify Developer",
            duration: "2019 - 2021",
            description: "Specialized in high-converting Shopify store development for scaling businesses",
            achievements: &[
                "Built 100+ Shopify stores",
                "Average conversion rate improvement of 35%",
                "Trained 20+ junior developers",
            ],
        },
        ExperienceEntry {
            id: 3,
            company: "TEVTA (Technical Education)",
            position: "E-commerce Trainer",
            duration: "2018 - 2019",
            description: "Conducted training programs for aspiring e-commerce entrepreneurs",
            achievements: &[
                "Trained 500+ students",
                "95% student satisfaction rate",
                "Developed comprehensive curriculum",
            ],
        },
        ExperienceEntry {
            id: 4,
            company: "Freelance Consultant",
            position: "Independent E-commerce Consultant",
            duration: "2016 - 2018",
            description: "Provided consulting services to small and medium businesses",
            achievements: &[
                "Served 100+ clients",
                "Achieved Top Rated Plus status on Upwork",
                "Generated $1M+ in client revenue",
            ],
        },
    ],
    projects: vec![
        Project {
            id: 1,
            title: "Fashion Brand Scale-up",
            category: ProjectCategory::ECommerce,
            description: "Scaled a fashion startup from $50K to $500K annual revenue",
            results: &[
                ("revenue", "900% increase"),
                ("conversion", "45% improvement"),
                ("traffic", "300% growth"),
            ],
            technologies: &["Shopify", "Facebook Ads", "Google Analytics", "Klaviyo"],
        },
        Project {
            id: 2,
            title: "Amazon FBA Optimization",
            category: ProjectCategory::Amazon,
            description: "Optimized product listings and PPC campaigns for electronics brand",
            results: &[
                ("sales", "250% increase"),
                ("ranking", "Top 3 in category"),
                ("roi", "400% ROAS"),
            ],
            technologies: &["Amazon Seller Central", "Helium 10", "PPC Management", "A/B Testing"],
        },
        Project {
            id: 3,
            title: "SaaS Mobile App",
            category: ProjectCategory::Development,
            description: "Developed cross-platform mobile app for productivity SaaS company",
            results: &[
                ("downloads", "50K+ downloads"),
                ("rating", "4.8 star rating"),
                ("retention", "85% user retention"),
            ],
            technologies: &["React Native", "Node.js", "MongoDB", "Firebase"],
        },
        Project {
            id: 4,
            title: "Health & Wellness Brand",
            category: ProjectCategory::Branding,
            description: "Complete brand identity and digital presence for wellness startup",
            results: &[
                ("engagement", "200% increase"),
                ("followers", "25K+ followers"),
                ("sales", "150% boost"),
            ],
            technologies: &["Adobe Creative Suite", "Figma", "WordPress", "Social Media"],
        },
    ],
    testimonials: vec![
        Testimonial {
            id: 1,
            author: "Sarah Johnson",
            position: "CEO, Fashion Forward",
            company: "Fashion Forward",
            quote: "Sohaib transformed our struggling online store into a 6-figure business. His expertise in Shopify and marketing strategy is unmatched.",
            rating: 5,
        },
        Testimonial {
            id: 2,
            author: "Mike Chen",
            position: "Founder, TechGadgets Pro",
            company: "TechGadgets Pro",
            quote: "Working with Sohaib on our Amazon optimization was the best decision we made. Our sales tripled in just 6 months.",
            rating: 5,
        },
        Testimonial {
            id: 3,
            author: "Emma Rodriguez",
            position: "Marketing Director, WellnessHub",
            company: "WellnessHub",
            quote: "The mobile app Sohaib developed for us exceeded all expectations. The user experience is incredible and our customers love it.",
            rating: 5,
        },
        Testimonial {
            id: 4,
            author: "David Thompson",
            position: "Owner, Home Decor Plus",
            company: "Home Decor Plus",
            quote: "Sohaib's SEO and digital marketing strategies helped us dominate our niche. We're now the #1 result for our main keywords.",
            rating: 5,
        },
    ],
    skills: vec![
        SkillRating { name: "E-commerce Strategy", level: 95 },
        SkillRating { name: "Shopify Development", level: 90 },
        SkillRating { name: "Amazon FBA", level: 88 },
        SkillRating { name: "Digital Marketing", level: 85 },
        SkillRating { name: "Brand Development", level: 80 },
        SkillRating { name: "Mobile App Development", level: 75 },
        SkillRating { name: "SEO Optimization", level: 92 },
        SkillRating { name: "Business Consulting", level: 93 },
    ],
});

/// The content bundle supplied to every component.
pub fn site() -> &'static SiteContent {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_stat_renders_in_millions() {
        assert_eq!(Stats::sales_display(4_000_000), "$4.0M+");
        assert_eq!(Stats::sales_display(2_500_000), "$2.5M+");
        assert_eq!(Stats::sales_display(0), "$0.0M+");
    }

    #[test]
    fn count_stats_render_with_plus_suffix() {
        assert_eq!(Stats::count_display(500), "500+");
        assert_eq!(Stats::count_display(8), "8+");
    }

    #[test]
    fn all_filter_is_identity_in_order() {
        let projects = &site().projects;
        let filtered = filter_projects(projects, CategoryFilter::All);
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn category_filter_is_exact_and_order_preserving() {
        let projects = &site().projects;
        for category in ProjectCategory::ALL {
            let filtered = filter_projects(projects, CategoryFilter::Only(category));
            // every output item has the category
            assert!(filtered.iter().all(|p| p.category == category));
            // no item with the category is excluded
            let expected: Vec<u32> = projects
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn testimonial_initials_join_name_parts() {
        let t = &site().testimonials[0];
        assert_eq!(t.initials(), "SJ");
    }

    #[test]
    fn content_bundle_is_complete() {
        let content = site();
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.experience.len(), 4);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.testimonials.len(), 4);
        assert_eq!(content.skills.len(), 8);
        assert!(content.testimonials.iter().all(|t| (1..=5).contains(&t.rating)));
        assert!(content.skills.iter().all(|s| s.level <= 100));
    }
}
