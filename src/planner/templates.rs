//! Built-in task templates per goal category

use super::types::{Category, Frequency};

#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub frequency: Frequency,
    pub estimated_days: u32,
}

const fn template(
    title: &'static str,
    description: &'static str,
    frequency: Frequency,
    estimated_days: u32,
) -> TaskTemplate {
    TaskTemplate {
        title,
        description,
        frequency,
        estimated_days,
    }
}

const HEALTH: [TaskTemplate; 4] = [
    template(
        "Daily Exercise",
        "Start with 30 minutes of physical activity",
        Frequency::Daily,
        30,
    ),
    template(
        "Nutrition Planning",
        "Plan healthy meals for the week",
        Frequency::Weekly,
        60,
    ),
    template(
        "Sleep Schedule",
        "Maintain consistent sleep pattern",
        Frequency::Daily,
        30,
    ),
    template(
        "Health Tracking",
        "Monitor progress with health metrics",
        Frequency::Daily,
        60,
    ),
];

const CAREER: [TaskTemplate; 4] = [
    template(
        "Skill Development",
        "Learn new professional skills",
        Frequency::Weekly,
        90,
    ),
    template(
        "Networking",
        "Build professional relationships",
        Frequency::Weekly,
        60,
    ),
    template(
        "Resume Update",
        "Maintain updated resume and portfolio",
        Frequency::Monthly,
        30,
    ),
    template(
        "Goal Setting",
        "Define career milestones",
        Frequency::Monthly,
        60,
    ),
];

const FINANCE: [TaskTemplate; 4] = [
    template(
        "Budget Planning",
        "Create and monitor monthly budget",
        Frequency::Monthly,
        30,
    ),
    template(
        "Savings Plan",
        "Set up automatic savings transfers",
        Frequency::Monthly,
        30,
    ),
    template(
        "Investment Learning",
        "Learn investment fundamentals",
        Frequency::Weekly,
        90,
    ),
    template(
        "Expense Tracking",
        "Track daily spending",
        Frequency::Daily,
        60,
    ),
];

const HOBBY: [TaskTemplate; 4] = [
    template(
        "Practice Time",
        "Dedicate time to your hobby",
        Frequency::Daily,
        30,
    ),
    template(
        "Learn New Techniques",
        "Explore advanced techniques",
        Frequency::Weekly,
        60,
    ),
    template(
        "Join Community",
        "Connect with enthusiasts",
        Frequency::Weekly,
        60,
    ),
    template(
        "Document Progress",
        "Keep a hobby journal",
        Frequency::Weekly,
        90,
    ),
];

pub fn templates_for(category: Category) -> &'static [TaskTemplate] {
    match category {
        Category::Health => &HEALTH,
        Category::Career => &CAREER,
        Category::Finance => &FINANCE,
        Category::Hobby => &HOBBY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_four_templates() {
        for category in Category::ALL {
            let templates = templates_for(category);
            assert_eq!(templates.len(), 4, "{}", category);
            assert!(templates.iter().all(|t| t.estimated_days > 0));
        }
    }
}
