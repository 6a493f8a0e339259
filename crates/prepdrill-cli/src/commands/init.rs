//! The `prepdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("prepdrill.toml").exists() {
        println!("prepdrill.toml already exists, skipping.");
    } else {
        std::fs::write("prepdrill.toml", STARTER_CONFIG)?;
        println!("Created prepdrill.toml");
    }

    if std::path::Path::new("question_bank.json").exists() {
        println!("question_bank.json already exists, skipping.");
    } else {
        std::fs::write("question_bank.json", STARTER_BANK)?;
        println!("Created question_bank.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own questions to question_bank.json");
    println!("  2. Run: prepdrill practice --role \"Java Developer\"");
    println!("  3. Run: prepdrill history");

    Ok(())
}

const STARTER_CONFIG: &str = r#"# prepdrill configuration

questions_per_session = 5
max_questions = 15
question_bank = "question_bank.json"
sessions_file = "prepdrill_sessions.json"
history_window = 10
"#;

const STARTER_BANK: &str = r#"{
  "Java Developer": {
    "Easy": [
      "What is the difference between a class and an object?",
      "What does the final keyword do?",
      "Explain the difference between an ArrayList and a LinkedList."
    ],
    "Medium": [
      "How does a HashMap work internally?",
      "Explain how garbage collection works on the JVM.",
      "What is the difference between checked and unchecked exceptions?"
    ],
    "Hard": [
      "Design a thread-safe LRU cache and discuss the trade-offs.",
      "How would you diagnose and fix a memory leak in a production service?",
      "Explain the Java memory model and what happens-before means."
    ]
  },
  "AI Engineer": {
    "Easy": [
      "What is the difference between supervised and unsupervised learning?",
      "What is overfitting and how do you detect it?",
      "Explain the difference between classification and regression."
    ],
    "Medium": [
      "How does gradient descent work and what can go wrong with it?",
      "Explain cross-validation and why a single train/test split can mislead you.",
      "What is the bias-variance trade-off?"
    ],
    "Hard": [
      "Design a feature engineering pipeline for a fraud-detection model.",
      "How would you deploy and monitor a model whose input distribution drifts?",
      "Explain how you would debug a model that performs well offline but poorly in production."
    ]
  },
  "Frontend Developer": {
    "Easy": [
      "What is the DOM?",
      "Explain the difference between inline, block, and inline-block elements.",
      "What does responsive design mean?"
    ],
    "Medium": [
      "How would you optimize the load performance of a large page?",
      "What accessibility considerations do you apply to forms?",
      "Explain how browser rendering works from HTML to pixels."
    ],
    "Hard": [
      "Design the architecture of a component library shared across teams.",
      "How would you track down a memory leak in a single-page application?",
      "Explain strategies for handling cross-browser compatibility at scale."
    ]
  },
  "Data Scientist": {
    "Easy": [
      "What is a p-value?",
      "Explain the difference between correlation and causation.",
      "What is an outlier and how can you handle one?"
    ],
    "Medium": [
      "How would you design an A/B testing experiment for a new feature?",
      "Explain how you approach missing data in a real dataset.",
      "How do you communicate uncertain results to stakeholders?"
    ],
    "Hard": [
      "Design an experiment to measure the long-term effect of a ranking change.",
      "How would you detect and correct for sample bias in a survey dataset?",
      "Explain a complete exploratory analysis you would run on an unfamiliar dataset."
    ]
  }
}
"#;
