//! Samples command implementation
//!
//! Prints the bundled sample prompts. They alternate weak and strong
//! phrasings of the same request, which makes them handy inputs for
//! trying out the analyzer.

use anyhow::Result;

pub(crate) const SAMPLE_PROMPTS: &[&str] = &[
    "Write a story about a robot.",
    "Please write a comprehensive 500-word story about a robot who discovers emotions for \
     the first time. The story should be written for a young adult audience, include \
     dialogue, and follow a clear three-act structure with an introduction, conflict, and \
     resolution. Focus on the robot's internal journey and use descriptive language to \
     create an engaging narrative.",
    "Explain machine learning.",
    "As an expert data scientist, please explain machine learning concepts to a business \
     executive audience. Your explanation should cover: 1) What machine learning is in \
     simple terms, 2) Three main types of machine learning with real-world examples, 3) \
     Key benefits and limitations, 4) How it differs from traditional programming. Keep \
     the explanation concise (300-400 words) and avoid technical jargon. Include practical \
     examples from business contexts like marketing, finance, or operations.",
    "Help me with my project.",
    "I'm working on a web development project for a small business website and need \
     guidance on the following specific areas: 1) Choosing between React and Vue.js for \
     the frontend, 2) Selecting a suitable backend framework (considering Node.js, Django, \
     or Rails), 3) Database recommendations for storing customer information and product \
     catalog, 4) Best practices for implementing user authentication and security. The \
     website will have approximately 1000 products and expect 500 daily users. Please \
     provide detailed recommendations with pros and cons for each option.",
];

pub(crate) fn run() -> Result<()> {
    println!("Sample prompts ({} total):\n", SAMPLE_PROMPTS.len());
    for (i, prompt) in SAMPLE_PROMPTS.iter().enumerate() {
        println!("--- Sample {} ---", i + 1);
        println!("{prompt}\n");
    }
    println!("Try one: promptforge analyze -p \"{}\"", SAMPLE_PROMPTS[0]);
    Ok(())
}
