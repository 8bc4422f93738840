//! Constant site content.

/// Decorative glyph standing in for an icon. Rendered inside a `span.icon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    Briefcase,
    Camera,
    Code,
    Github,
    Link,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Phone,
    Rocket,
    Send,
    Stethoscope,
    Users,
    X,
    Zap,
    CheckCircle,
    AlertCircle,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Award => "🏅",
            Icon::Briefcase => "💼",
            Icon::Camera => "📷",
            Icon::Code => "</>",
            Icon::Github => "⌥",
            Icon::Link => "↗",
            Icon::Linkedin => "in",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Menu => "☰",
            Icon::Phone => "☎",
            Icon::Rocket => "🚀",
            Icon::Send => "➤",
            Icon::Stethoscope => "⚕",
            Icon::Users => "👥",
            Icon::X => "✕",
            Icon::Zap => "⚡",
            Icon::CheckCircle => "✔",
            Icon::AlertCircle => "⚠",
        }
    }

    /// Kebab-case name used for the `icon-<name>` class.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::Briefcase => "briefcase",
            Icon::Camera => "camera",
            Icon::Code => "code",
            Icon::Github => "github",
            Icon::Link => "link",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Menu => "menu",
            Icon::Phone => "phone",
            Icon::Rocket => "rocket",
            Icon::Send => "send",
            Icon::Stethoscope => "stethoscope",
            Icon::Users => "users",
            Icon::X => "x",
            Icon::Zap => "zap",
            Icon::CheckCircle => "check-circle",
            Icon::AlertCircle => "alert-circle",
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub logo: &'static str,
    pub portrait: &'static str,
    pub contact_visual: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Abhay Korat",
    title: "Lead Software Engineer | Mobile Architecture",
    tagline: "Flutter & Native (iOS/Android) Expert • 11+ Years Building Scalable Fintech & Enterprise Solutions",
    logo: "/nav-logo.png",
    portrait: "/spaceprofile.png",
    contact_visual: "/contact-bg.jpg",
};

pub struct HeroTag {
    pub icon: Icon,
    pub label: &'static str,
}

pub const HERO_TAGS: &[HeroTag] = &[
    HeroTag { icon: Icon::Code, label: "Flutter · Dart · Swift · Kotlin" },
    HeroTag { icon: Icon::Zap, label: "Clean Architecture · BLoC · MVVM" },
    HeroTag { icon: Icon::Camera, label: "CI/CD · Fastlane · Firebase" },
    HeroTag { icon: Icon::Briefcase, label: "Fintech · Enterprise · White-Label" },
];

pub struct Stat {
    pub icon: Icon,
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: Icon::Award, number: "11+", label: "Years Experience" },
    Stat { icon: Icon::Code, number: "50+", label: "Apps works" },
    Stat { icon: Icon::Users, number: "12+", label: "Team Members Led" },
    Stat { icon: Icon::Rocket, number: "40%", label: "Faster Releases" },
];

pub const SUMMARY: &str = "Results-driven Lead Software Engineer with 11+ years of experience designing and delivering scalable, \
secure, high-traffic mobile applications in Fintech and Enterprise domains. Expert in Flutter, Dart, \
Swift, Kotlin, and end-to-end mobile architecture (Clean Architecture, MVVM, BLoC, modularization, \
dynamic theming, CI/CD). Proven track record leading engineering teams, mentoring developers, \
establishing coding standards, and driving on-time delivery of complex, multi-platform products.";

pub const COMPETENCIES: &[&str] = &[
    "Architecting scalable mobile platforms supporting high-volume user onboarding and secure payment processing",
    "Designing white-label Flutter architectures for multi-brand deployment with dynamic theming and configurations",
    "Leading cross-functional teams of 12+ engineers with code reviews, sprint planning, and technical mentorship",
    "Implementing CI/CD pipelines reducing release cycles by 40% and improving deployment efficiency",
    "Optimizing app performance with 25% size reduction and 35% faster startup times",
    "Establishing engineering standards, reusable component libraries, and modular architecture patterns",
];

pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        category: "Mobile Development",
        skills: &["Flutter", "Dart", "Swift", "Objective-C", "Kotlin", "Java", "iOS SDK", "Android SDK"],
    },
    SkillCategory {
        category: "Architecture & Patterns",
        skills: &[
            "Clean Architecture",
            "MVVM",
            "BLoC/Cubit",
            "Provider",
            "Modular Architecture",
            "Dependency Injection",
        ],
    },
    SkillCategory {
        category: "State Management",
        skills: &["BLoC", "Cubit", "Provider", "Riverpod", "GetX"],
    },
    SkillCategory {
        category: "CI/CD & DevOps",
        skills: &["GitLab CI/CD", "Fastlane", "GitHub Actions", "CodeMagic", "Firebase App Distribution"],
    },
    SkillCategory {
        category: "Backend & Cloud",
        skills: &["Firebase", "REST APIs", "GraphQL", "Socket.io", "Payment Gateways", "Local Storage"],
    },
    SkillCategory {
        category: "Tools & Testing",
        skills: &["Jira", "Postman", "Charles Proxy", "XCTest", "Flutter Integration Tests"],
    },
];

pub struct Domain {
    pub icon: Icon,
    pub name: &'static str,
    pub summary: &'static str,
}

pub const DOMAINS: &[Domain] = &[
    Domain {
        icon: Icon::Award,
        name: "Fintech",
        summary: "KYC/AML verification, Payment workflows, Secure authentication, Trading platforms",
    },
    Domain {
        icon: Icon::Briefcase,
        name: "Enterprise",
        summary: "Multi-tenancy, White-label apps, Role-based access, Offline-first architecture",
    },
    Domain {
        icon: Icon::Stethoscope,
        name: "Healthcare & Insurance",
        summary: "Real-time data feeds, Health & Fitness, Routine, inventory, Appointments, notifier streaming, High-volume coredata",
    },
    Domain {
        icon: Icon::Zap,
        name: "High-Performance",
        summary: "Real-time data feeds, Socket integration, Market streaming, High-volume transactions",
    },
];

pub struct Education {
    pub degree: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Engineering – Computer Science & Engineering",
        detail: "Dr. Subhash University, Junagadh | 2012 – 2014",
    },
    Education {
        degree: "Diploma in Computer Engineering",
        detail: "R.N.G. Patel Institute of Technology, Bardoli | 2008 – 2011",
    },
];

pub struct Experience {
    pub company: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Finoux Solutions Private Limited",
        location: "Mumbai, Maharashtra",
        role: "Lead Software Engineer",
        period: "Jul 2024 – Present",
        achievements: &[
            "Architecting next-gen Fintech & Enterprise mobile platforms supporting high-volume user onboarding, KYC/AML verification, and payment processing",
            "Designed white-label Flutter architecture enabling single codebase deployment across multiple brands and environments",
            "Established modular architecture and CI/CD pipelines using GitHub Actions + CodeMagic, reducing release cycles by 40%",
            "Mentoring team of 12+ engineers, conducting code reviews, and driving sprint planning",
        ],
    },
    Experience {
        company: "Sunflower Lab",
        location: "Vadodara, Gujarat",
        role: "Senior Flutter Developer",
        period: "Jun 2022 – May 2024",
        achievements: &[
            "Led development of large-scale Flutter applications using BLoC, Flavors, and clean architecture patterns",
            "Reduced app size by 25% and improved startup time by 35% through performance optimization",
            "Implemented automated CI/CD pipelines with Fastlane and Firebase App Distribution",
            "Mentored junior developers and conducted architecture reviews",
        ],
    },
    Experience {
        company: "Knackit",
        location: "Bengaluru, Karnataka",
        role: "Founding Engineer – iOS & Flutter Expert",
        period: "Sep 2020 – May 2022",
        achievements: &[
            "Built core product from scratch using Flutter and native iOS/Android modules as founding member",
            "Established reusable component library and architecture patterns adopted company-wide",
            "Collaborated with founders to define technical roadmap and prioritize features",
            "Reduced app size by 50+ MB by replacing FFmpeg with native background method channels",
        ],
    },
    Experience {
        company: "CoderKube Technologies",
        location: "Surat, Gujarat",
        role: "Team Lead",
        period: "Apr 2019 – Aug 2020",
        achievements: &[
            "Led end-to-end delivery of multiple client projects with task allocation and quality management",
            "Drove adoption of cross-platform Flutter strategy, reducing duplicate code by 60%",
            "Managed project timelines and coordinated with stakeholders",
        ],
    },
    Experience {
        company: "BlueBell Apps",
        location: "Copenhagen, Denmark",
        role: "Mobile Application Developer",
        period: "Feb 2017 – Mar 2019",
        achievements: &[
            "Contract-based iOS development with continuous integration and delivery",
            "Integrated Bank Verification, dynamic forms UI, multipart data handling",
            "Implemented In-App Purchases, AdMob, and social media authentication",
        ],
    },
    Experience {
        company: "IBL Infotech",
        location: "Surat, Gujarat",
        role: "Senior iOS Developer",
        period: "Apr 2014 – Jan 2017",
        achievements: &[
            "Delivered 15+ production iOS apps using Swift and Objective-C",
            "Integrated VOIP (CallKit), video streaming, and push notifications",
            "Implemented In-App Purchases, AdMob, and Facebook Graph Auth",
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub highlight: Option<&'static str>,
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "XTSApp",
        description: "Enterprise trading platform with dynamic theming, white-label branding, and real-time market feeds via multiple socket channels.",
        features: &[
            "Buy/Sell engine with portfolio management and watchlist",
            "Real-time order updates with streaming mechanisms",
            "Encrypted local storage + secure session management",
            "Advanced charting and holdings/positions tracking",
        ],
        tags: &["Flutter", ".NET", "MySQL", "Sockets", "Firebase", "Clean Architecture", "BLoC"],
        highlight: None,
        link: Some("https://symphonyfintech.com/xts/"),
    },
    Project {
        title: "BullForce",
        description: "Comprehensive fintech platform with KYC/AML onboarding, trading capabilities, and payment processing.",
        features: &[
            "Aadhar/PAN/Bank verification for onboarding",
            "UPI/NetBanking/SIP/SWP workflows",
            "Advanced scanners and dynamic market insights",
            "Real-time positions, watchlists, and order book",
        ],
        tags: &["Flutter", ".NET", "MySQL", "Sockets", "CI/CD", "BLoC", "Payment Gateways"],
        highlight: None,
        link: Some("https://bullforce.co"),
    },
    Project {
        title: "Spark - IRISH",
        description: "Dynamic page rendering engine with multi-platform secure authentication and responsive UI/UX.",
        features: &[
            "Conditional routing with dynamic page rendering",
            "Microsoft Auth + deep link implementation",
            "Single-space UI layout for multiple device form factors",
            "Code obfuscation and platform-specific security hardening",
        ],
        tags: &["Flutter", "JavaScript", "React", "Swift", "Kotlin", "CI/CD", "MVVM", "GetX"],
        highlight: None,
        link: Some(
            "https://play.google.com/store/apps/details?id=com.wealthspectrum.app.spark&pcampaignid=web_share",
        ),
    },
    Project {
        title: "AlleyData",
        description: "Universal health and fitness application with comprehensive data synchronization and offline capabilities.",
        features: &[
            "Health tracking, routine management, and appointments",
            "CoreData synchronization with API responses",
            "Secure session management with notifiers",
            "Universal UI for iPhone and iPad",
        ],
        tags: &["iOS", "Swift", "CoreData", "RxSwift", "Coredata", "MVVM", "CI/CD"],
        highlight: None,
        link: Some("https://alleydata.com/"),
    },
    Project {
        title: "Knackit",
        description: "Founding member project with wallet, rewards, and multi-language support.",
        features: &[
            "Reduced app size by 50+ MB with native background methods",
            "Wallet, Rewards, Coins, and Transactional modules",
            "Localization for 12 Indian languages",
            "Reusable component library adopted across teams",
        ],
        tags: &["Flutter", "Swift", "Kotlin", "Laravel", "MongoDB", "CI/CD", "Payment Gateways"],
        highlight: Some("Founders raised $1.5M funding"),
        link: Some("https://www.crunchbase.com/organization/knackit"),
    },
    Project {
        title: "Agrimedia",
        description: "Award-winning application in agriculture sector of India 2019.",
        features: &[
            "News module with dynamic images, videos, and deep links",
            "Multilingual support (Hindi, English, Gujarati)",
            "Q&A module for farmers to post and resolve issues",
            "Analytics pipeline for user interactions",
        ],
        tags: &["Swift", "MVC", "PHP", "MySQL"],
        highlight: Some("Award-winning app 2019"),
        link: Some("https://apps.apple.com/in/app/agrimedia/id1434653553"),
    },
    Project {
        title: "Legacy Vault",
        description: "Location-based service with real-time tracking and social features.",
        features: &[
            "Dynamic map annotations with Google Maps SDK",
            "Offline location tracking with periodic sync",
            "Google Places API check-in/out system",
            "Real-time chat with Socket.io",
        ],
        tags: &["Flutter", "Swift", "Kotlin", "Java", "MySQL", "Firebase", "CI/CD"],
        highlight: None,
        link: Some("https://www.legacyvaultapp.com"),
    },
    Project {
        title: "Benefact4",
        description: "Social donation platform with timeline feeds and media sharing.",
        features: &[
            "Donation feed with timeline and multi-layer filters",
            "Widget-based social sharing with screenshot composer",
            "Multipart uploads for media content",
            "Subscription management and analytics tracking",
        ],
        tags: &["Flutter", "Java", "MySQL", "Firebase", "CI/CD", "Payment Gateways"],
        highlight: None,
        link: Some("https://www.heeythere.com"),
    },
    Project {
        title: "Baby led weaning guide recipes",
        description: "Social donation platform with timeline feeds and media sharing.",
        features: &[
            "Multi-language localization (DE, FR, EN, IT)",
            "Universal UI for iPhone + iPad",
            "WebKit rendering for WHO nutrition content",
            "In-App Purchases for premium content",
            "Payment processing with Subscription plans (iOS + Android)",
        ],
        tags: &["Swift", "Localization", "Auto-layout", "In-app purchase", "WebKit", "Alamofire", "Coredata"],
        highlight: None,
        link: Some("https://www.babyledrecipes.com/apps.html"),
    },
];

pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    /// `None` renders plain text instead of a link.
    pub href: Option<&'static str>,
}

impl ContactChannel {
    /// Links leaving the site open in a new tab.
    pub fn is_external(&self) -> bool {
        self.href.is_some_and(|href| href.starts_with("http"))
    }
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: Icon::MapPin, label: "Surat, Gujarat, India", href: None },
    ContactChannel { icon: Icon::Phone, label: "+91 9998529350", href: Some("tel:+919998529350") },
    ContactChannel {
        icon: Icon::Mail,
        label: "koratabhaym@gmail.com",
        href: Some("mailto:koratabhaym@gmail.com"),
    },
    ContactChannel {
        icon: Icon::Linkedin,
        label: "linkedin.com/in/abhaykorat",
        href: Some("https://linkedin.com/in/abhaykorat"),
    },
    ContactChannel { icon: Icon::Github, label: "github.com/abhuzz", href: Some("https://github.com/abhuzz") },
];

pub const FOOTER_LINE: &str = "© 2024 Abhay Korat. Lead Software Engineer | Mobile Architecture Specialist";
pub const FOOTER_TAGLINE: &str = "Building scalable mobile solutions • Flutter • iOS • Android";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_sizes() {
        assert_eq!(HERO_TAGS.len(), 4);
        assert_eq!(STATS.len(), 4);
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(DOMAINS.len(), 4);
        assert_eq!(EXPERIENCES.len(), 6);
        assert_eq!(PROJECTS.len(), 9);
        assert_eq!(CONTACT_CHANNELS.len(), 5);
    }

    #[test]
    fn only_web_links_are_external() {
        let external: Vec<_> = CONTACT_CHANNELS
            .iter()
            .filter(|channel| channel.is_external())
            .map(|channel| channel.label)
            .collect();
        assert_eq!(external, ["linkedin.com/in/abhaykorat", "github.com/abhuzz"]);
    }

    #[test]
    fn every_project_links_out() {
        assert!(PROJECTS.iter().all(|project| project.link.is_some()));
    }
}
