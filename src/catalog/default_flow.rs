//! The built-in heart-failure check-in script.
//!
//! Twelve sections walking a patient through adherence, symptoms, vitals,
//! lifestyle, and follow-up scheduling. Conditional questions read prior
//! answers: the adherence follow-up is only asked after imperfect adherence,
//! the visit-reason question only after a reported hospital visit, and the
//! reminder-frequency question only when the patient wants reminders.

use crate::catalog::{Catalog, IconRef, Question, Section};

/// Answer to `medication_adherence` that suppresses the difficulty follow-up.
pub const ADHERENCE_FULL: &str = "Yes, all as prescribed";

/// Build the default check-in catalog.
pub fn catalog() -> Catalog {
    let sections = vec![
        Section::new(
            "initial",
            "Initial Greeting & Adherence Check",
            vec![
                Question::new(
                    "ready",
                    "It's time for your health check-in. Ready to start?",
                    IconRef::Clock,
                )
                .with_answers(["Yes", "No"]),
                Question::new(
                    "medication_adherence",
                    "Have you been able to take all of your medications as prescribed?",
                    IconRef::Pill,
                )
                .with_answers([
                    ADHERENCE_FULL,
                    "Missed a few doses",
                    "Missed several doses",
                    "Stopped taking one or more medications",
                ]),
                Question::new(
                    "adherence_difficulty",
                    "Can you tell me more about why it's been difficult?",
                    IconRef::AlertCircle,
                )
                .with_answers([
                    "Side effects",
                    "Cost concerns",
                    "Forgetting to take them",
                    "Other reasons",
                ])
                .with_conditional(|r| r.get("medication_adherence") != Some(ADHERENCE_FULL)),
            ],
        ),
        Section::new(
            "medications",
            "Medication Details",
            vec![
                Question::new(
                    "side_effects",
                    "Have you experienced any side effects from your medications?",
                    IconRef::AlertCircle,
                )
                .with_answers(["Yes", "No", "Describe side effects"]),
                Question::new(
                    "med_changes",
                    "Any recent changes to your medication regimen?",
                    IconRef::Calendar,
                )
                .with_answers(["Yes", "No", "Describe changes"]),
                Question::new(
                    "med_timing",
                    "Are you following the specific dose and timing for each medication?",
                    IconRef::Clock,
                )
                .with_answers(["Yes", "No"]),
            ],
        ),
        Section::new(
            "symptoms",
            "Symptom Check",
            vec![
                Question::new(
                    "symptoms",
                    "Have you experienced any of the following symptoms: shortness of \
                     breath, swelling, fatigue, chest pain?",
                    IconRef::Stethoscope,
                )
                .with_answers([
                    "Shortness of breath",
                    "Swelling",
                    "Fatigue",
                    "Chest pain",
                    "None",
                ])
                .with_multiple(),
                Question::new(
                    "symptom_note",
                    "Please let your healthcare provider know about new or worsening symptoms.",
                    IconRef::AlertCircle,
                ),
            ],
        ),
        Section::new(
            "weight",
            "Weight Check",
            vec![
                Question::new(
                    "current_weight",
                    "Could you tell me your current weight?",
                    IconRef::Scale,
                )
                .with_answers(["Weight in lbs/kg", "Skip"])
                .with_input(),
                Question::new(
                    "weight_check",
                    "Are you weighing yourself regularly around the same time each day?",
                    IconRef::Calendar,
                )
                .with_answers(["Yes", "No"]),
            ],
        ),
        Section::new(
            "blood_pressure",
            "Blood Pressure & Heart Rate Check",
            vec![
                Question::new(
                    "bp_reading",
                    "Could you share your most recent blood pressure reading?",
                    IconRef::Heart,
                )
                .with_answers(["Systolic/Diastolic"])
                .with_input(),
                Question::new(
                    "heart_rate",
                    "What is your most recent heart rate?",
                    IconRef::Heart,
                )
                .with_answers(["Heart rate in bpm"])
                .with_input(),
            ],
        ),
        Section::new(
            "diet",
            "Dietary and Fluid Intake",
            vec![
                Question::new(
                    "fluid_restriction",
                    "Are you following any fluid restrictions?",
                    IconRef::Droplets,
                )
                .with_answers(["Yes", "No", "Challenges with fluid restriction"]),
                Question::new(
                    "sodium_intake",
                    "How about sodium intake? Are you managing it within recommended limits?",
                    IconRef::AlertCircle,
                )
                .with_answers(["Yes", "No", "Challenges with sodium intake"]),
            ],
        ),
        Section::new(
            "activity",
            "Physical Activity & Exercise",
            vec![
                Question::new(
                    "activity_level",
                    "Have you been able to keep up with your recommended level of \
                     physical activity?",
                    IconRef::Activity,
                )
                .with_answers(["Yes", "No"]),
                Question::new(
                    "activity_difficulties",
                    "What types of difficulties are you experiencing with activity?",
                    IconRef::AlertCircle,
                )
                .with_answers([
                    "Shortness of breath",
                    "Fatigue during exertion",
                    "Joint pain",
                    "None",
                ]),
            ],
        ),
        Section::new(
            "labs",
            "Lab Results (Optional)",
            vec![
                Question::new(
                    "recent_labs",
                    "Do you have any recent lab results to share?",
                    IconRef::Calendar,
                )
                .with_answers(["Yes", "No", "Provide lab details if available"]),
            ],
        ),
        Section::new(
            "hospital_visits",
            "Recent Hospitalizations or ER Visits",
            vec![
                Question::new(
                    "hospital_visits",
                    "Since our last check-in, have you had any hospital or ER visits?",
                    IconRef::AlertCircle,
                )
                .with_answers(["Yes", "No"]),
                Question::new(
                    "visit_reason",
                    "Could you briefly describe the reason for your visit?",
                    IconRef::Calendar,
                )
                .with_answers(["Describe reason"])
                .with_input()
                .with_conditional(|r| r.get("hospital_visits") == Some("Yes")),
            ],
        ),
        Section::new(
            "support",
            "Psychological and Social Support",
            vec![
                Question::new(
                    "mental_health",
                    "How have you been feeling mentally and emotionally?",
                    IconRef::Brain,
                )
                .with_answers(["Describe mental and emotional state", "None"]),
                Question::new(
                    "support_needed",
                    "Do you have the support you need for managing medications and \
                     health routines?",
                    IconRef::Smile,
                )
                .with_answers(["Yes", "No"]),
            ],
        ),
        Section::new(
            "quality_of_life",
            "Patient-Reported Outcomes & Quality of Life",
            vec![
                Question::new(
                    "daily_tasks",
                    "How would you rate your ability to complete daily tasks?",
                    IconRef::Sun,
                )
                .with_answers(["Describe ability to complete tasks"]),
                Question::new(
                    "quality_of_life",
                    "Overall, how is your quality of life right now?",
                    IconRef::Sun,
                )
                .with_answers(["Describe quality of life"]),
            ],
        ),
        Section::new(
            "follow_up",
            "Follow-Up Reminders",
            vec![
                Question::new(
                    "reminder_checkin",
                    "Would you like a reminder to check in again?",
                    IconRef::Calendar,
                )
                .with_answers(["Yes", "No"]),
                Question::new(
                    "reminder_frequency",
                    "How often would you like to receive reminders?",
                    IconRef::Calendar,
                )
                .with_answers(["Daily", "Weekly", "Bi-weekly"])
                .with_conditional(|r| r.get("reminder_checkin") == Some("Yes")),
            ],
        ),
    ];

    // The script above is statically well-formed; validation only fails on
    // duplicate ids/keys introduced by edits.
    Catalog::new(sections).expect("default check-in catalog is valid")
}
