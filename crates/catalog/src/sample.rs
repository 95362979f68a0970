//! The fixed course catalog the marketplace ships with.

use shared::domain::{Course, CourseId, DeliveryMode};

struct Row {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    institute: &'static str,
    category: &'static str,
    mode: DeliveryMode,
    instructor: &'static str,
    price: u32,
    duration: &'static str,
    location: Option<&'static str>,
}

impl Row {
    fn to_course(&self) -> Course {
        Course {
            id: CourseId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            institute: self.institute.to_string(),
            category: self.category.to_string(),
            mode: self.mode,
            instructor: self.instructor.to_string(),
            price: self.price,
            duration: self.duration.to_string(),
            location: self.location.map(str::to_string),
        }
    }
}

const ROWS: [Row; 6] = [
    Row {
        id: "1",
        title: "Hatha Yoga Fundamentals",
        description: "Learn the basics of Hatha Yoga with focus on alignment and breathing techniques. Perfect for beginners.",
        institute: "Peaceful Yoga Center",
        category: "Yoga",
        mode: DeliveryMode::Offline,
        instructor: "Sarah Johnson",
        price: 299,
        duration: "4 weeks",
        location: Some("San Francisco, CA"),
    },
    Row {
        id: "2",
        title: "Ayurvedic Nutrition Online",
        description: "Discover principles of Ayurvedic eating for optimal health and wellness in this comprehensive course.",
        institute: "Peaceful Yoga Center",
        category: "Ayurveda",
        mode: DeliveryMode::Online,
        instructor: "Dr. Raj Patel",
        price: 199,
        duration: "6 weeks",
        location: None,
    },
    Row {
        id: "3",
        title: "Reiki Healing Level 1",
        description: "Introduction to Reiki energy healing techniques and hands-on practice sessions.",
        institute: "Healing Light Institute",
        category: "Energy Healing",
        mode: DeliveryMode::Offline,
        instructor: "Master Chen",
        price: 399,
        duration: "3 days",
        location: Some("Seattle, WA"),
    },
    Row {
        id: "4",
        title: "Meditation for Beginners",
        description: "Learn various meditation techniques to reduce stress and increase mindfulness.",
        institute: "Mindful Living Center",
        category: "Meditation",
        mode: DeliveryMode::Online,
        instructor: "Lisa Thompson",
        price: 149,
        duration: "8 weeks",
        location: None,
    },
    Row {
        id: "5",
        title: "Vinyasa Flow Yoga",
        description: "Dynamic yoga practice linking breath with movement for strength and flexibility.",
        institute: "Flow Studio",
        category: "Yoga",
        mode: DeliveryMode::Offline,
        instructor: "Maya Rodriguez",
        price: 259,
        duration: "6 weeks",
        location: Some("Austin, TX"),
    },
    Row {
        id: "6",
        title: "Herbal Medicine Basics",
        description: "Learn about medicinal plants and how to prepare natural remedies at home.",
        institute: "Nature's Wisdom School",
        category: "Ayurveda",
        mode: DeliveryMode::Online,
        instructor: "Dr. Green",
        price: 179,
        duration: "5 weeks",
        location: None,
    },
];

/// Institute shown on the dashboard when the caller does not name one.
pub const DEFAULT_DASHBOARD_INSTITUTE: &str = "Peaceful Yoga Center";

pub fn sample_courses() -> Vec<Course> {
    ROWS.iter().map(Row::to_course).collect()
}
