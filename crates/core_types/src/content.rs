//! Static landing page content.
//!
//! Each list is unique by its display key (title or name); the frontend uses
//! that key when rendering lists.

/// A link inside a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

/// A top-level header entry. Entries with children render as dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub children: &'static [NavItem],
}

impl NavLink {
    pub fn has_dropdown(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub title: &'static str,
    pub cadence: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

/// Hero headline and calls to action.
pub const HERO_TITLE: &str = "Build skills, find your people, grow together";
pub const HERO_SUBTITLE: &str =
    "A community platform for learners, mentors and organisations working on technology for good.";

/// About section paragraphs.
pub const ABOUT: &[&str] = &[
    "We started as a weekly meetup in a borrowed classroom. Today we run programs, \
     mentorship and project work for members across the region.",
    "Everything we do is free to join and run by volunteers who believe that good \
     teaching and good company make people better engineers.",
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "About",
        href: "#about",
        children: &[],
    },
    NavLink {
        label: "Services",
        href: "#services",
        children: &[
            NavItem {
                label: "Mentorship",
                href: "#services",
                description: "One-to-one guidance from experienced members",
            },
            NavItem {
                label: "Workshops",
                href: "#services",
                description: "Hands-on sessions on tools and practices",
            },
            NavItem {
                label: "Project Studio",
                href: "#services",
                description: "Team projects for local non-profits",
            },
        ],
    },
    NavLink {
        label: "Programs",
        href: "#programs",
        children: &[
            NavItem {
                label: "Bootcamp",
                href: "#programs",
                description: "Twelve weeks from first line to first project",
            },
            NavItem {
                label: "Open Source Fridays",
                href: "#programs",
                description: "Contribute to real projects with guidance",
            },
            NavItem {
                label: "Leadership Track",
                href: "#programs",
                description: "Learn to run teams and events",
            },
        ],
    },
    NavLink {
        label: "Team",
        href: "#team",
        children: &[],
    },
    NavLink {
        label: "Partners",
        href: "#partners",
        children: &[],
    },
    NavLink {
        label: "Contact",
        href: "#contact",
        children: &[],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Mentorship",
        summary: "Get paired with a mentor who meets you every two weeks and reviews your work.",
        icon: "compass",
    },
    Service {
        title: "Workshops",
        summary: "Evening sessions on version control, testing, deployment and design.",
        icon: "wrench",
    },
    Service {
        title: "Project Studio",
        summary: "Small teams build and maintain software for local non-profits.",
        icon: "layers",
    },
    Service {
        title: "Career Support",
        summary: "Portfolio reviews, mock interviews and introductions to hiring partners.",
        icon: "briefcase",
    },
];

pub const PROGRAMS: &[Program] = &[
    Program {
        title: "Bootcamp",
        cadence: "12 weeks, twice a year",
        summary: "A structured path from fundamentals to a deployed team project.",
        image: "/images/programs/bootcamp.jpg",
    },
    Program {
        title: "Open Source Fridays",
        cadence: "Every Friday",
        summary: "Pick an issue, pair with a maintainer, ship a pull request.",
        image: "/images/programs/open-source.jpg",
    },
    Program {
        title: "Leadership Track",
        cadence: "6 months",
        summary: "For members ready to organise events and lead project teams.",
        image: "/images/programs/leadership.jpg",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Amara Okafor",
        role: "Founder & Director",
        bio: "Runs programs and partnerships.",
        image: "/images/team/amara.jpg",
    },
    TeamMember {
        name: "Jonas Lindqvist",
        role: "Head of Mentorship",
        bio: "Matches mentors and members.",
        image: "/images/team/jonas.jpg",
    },
    TeamMember {
        name: "Priya Raman",
        role: "Workshop Lead",
        bio: "Designs the workshop curriculum.",
        image: "/images/team/priya.jpg",
    },
    TeamMember {
        name: "Mateo García",
        role: "Project Studio Lead",
        bio: "Scopes projects with partner organisations.",
        image: "/images/team/mateo.jpg",
    },
];

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "City Library",
        logo: "/images/partners/library.svg",
        url: "https://example.org/library",
    },
    Partner {
        name: "Northside Makerspace",
        logo: "/images/partners/makerspace.svg",
        url: "https://example.org/makerspace",
    },
    Partner {
        name: "Harbor Food Bank",
        logo: "/images/partners/foodbank.svg",
        url: "https://example.org/foodbank",
    },
    Partner {
        name: "Tech for Schools",
        logo: "/images/partners/schools.svg",
        url: "https://example.org/schools",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "hello@example.org",
        href: "mailto:hello@example.org",
    },
    ContactChannel {
        label: "Phone",
        value: "+1 555 0100",
        href: "tel:+15550100",
    },
    ContactChannel {
        label: "Address",
        value: "12 Market Street, Room 4",
        href: "https://maps.example.org/?q=12+Market+Street",
    },
];
