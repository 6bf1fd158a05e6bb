// src/domain/positions.rs

/// Positions offered on the public form.
pub const JOB_POSITIONS: [&str; 12] = [
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Product Manager",
    "UI/UX Designer",
    "Quality Assurance Engineer",
    "Mobile Developer",
    "Marketing Specialist",
    "Business Analyst",
    "Customer Support Representative",
];

pub fn is_listed_position(position: &str) -> bool {
    JOB_POSITIONS.contains(&position)
}
