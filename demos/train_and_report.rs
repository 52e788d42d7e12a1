//! Training example - builds a model from an inline table and reports
//! its frequencies and probabilities.

use teki::classify::prior::{LabelFrequencyPrior, PriorSource};
use teki::corpus::reader::TableReader;
use teki::error::Result;
use teki::model::builder::ModelBuilder;

const TABLE: &str = "\
le,DET,det,SEN:1,cmr-wiki-c001-a1,LIT
gouvernement,NOUN,nsubj,SEN:1,cmr-wiki-c001-a1,LIT
a,AUX,aux,SEN:1,cmr-wiki-c001-a1,LIT
adopté,VERB,root,SEN:1,cmr-wiki-c001-a1,LIT
la,DET,det,SEN:1,cmr-wiki-c001-a1,LIT
loi,NOUN,obj,SEN:1,cmr-wiki-c001-a1,LIT
la,DET,det,SEN:2,cmr-wiki-c001-a1,LIT
séance,NOUN,nsubj,SEN:2,cmr-wiki-c001-a1,LIT
est,AUX,cop,SEN:2,cmr-wiki-c001-a1,LIT
levée,VERB,root,SEN:2,cmr-wiki-c001-a1,LIT
wesh,INTJ,discourse,SEN:1,cmr-esl-c004-a2,ORAL
ça,PRON,nsubj,SEN:1,cmr-esl-c004-a2,ORAL
va,VERB,root,SEN:1,cmr-esl-c004-a2,ORAL
ouais,INTJ,discourse,SEN:2,cmr-esl-c004-a2,ORAL
c'est,PRON,nsubj,SEN:2,cmr-esl-c004-a2,ORAL
grave,ADV,advmod,SEN:2,cmr-esl-c004-a2,ORAL
cool,ADJ,root,SEN:2,cmr-esl-c004-a2,ORAL
";

fn main() -> Result<()> {
    println!("=== Teki Training Example - Frequencies and Probabilities ===\n");

    // Load the training table
    let table = TableReader::new().from_str(TABLE)?;
    let counts = table.label_counts();
    println!(
        "Loaded {} rows: {} LIT sentences, {} ORAL sentences",
        table.len(),
        counts.lit,
        counts.oral
    );

    // Build the frequency and probability model
    let model = ModelBuilder::new().build(&table)?;
    let report = model.frequency_report();
    println!(
        "Model covers {} distinct words over {} sentences\n",
        report.vocabulary_size, report.total_sentences
    );

    // Example 1: Per-word likelihood pairs
    println!("1. Word likelihoods:");
    for word in ["la", "loi", "wesh", "ça"] {
        let pair = model.likelihood(word).unwrap();
        println!(
            "   {:<6} p(w|LIT) = {:.4}  p(w|ORAL) = {:.4}",
            word, pair.lit, pair.oral
        );
    }

    // Example 2: Fallback pair applied to unseen words
    println!("\n2. Out-of-vocabulary fallback:");
    let oov = model.oov_pair();
    println!("   p(w|LIT) = {:.4}  p(w|ORAL) = {:.4}", oov.lit, oov.oral);

    // Example 3: Prior probabilities from label frequencies
    println!("\n3. Priors:");
    let priors = LabelFrequencyPrior.priors(&model);
    println!(
        "   p(LIT) = {:.4}  p(ORAL) = {:.4}",
        priors.lit, priors.oral
    );

    println!("\n=== Library Information ===");
    println!("Teki version: {}", teki::VERSION);

    Ok(())
}
