//! Classification example - trains a model and classifies tokenized
//! sentences as LIT, ORAL, or UNK.

use teki::classify::classifier::SentenceClassifier;
use teki::classify::summary::BatchSummary;
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
    println!("=== Teki Classification Example ===\n");

    let table = TableReader::new().from_str(TABLE)?;
    let model = ModelBuilder::new().build(&table)?;
    let classifier = SentenceClassifier::new(model);

    // Example 1: A sentence leaning literary
    println!("1. Classifying 'la loi est adoptée':");
    let tokens: Vec<&str> = "la loi est adoptée".split_whitespace().collect();
    let score = classifier.score(&tokens);
    println!(
        "   LIT = {:.3e}  ORAL = {:.3e}  ->  {}",
        score.totals.lit,
        score.totals.oral,
        score.verdict()
    );

    // Example 2: A sentence leaning colloquial
    println!("\n2. Classifying 'ouais c'est grave cool':");
    let tokens: Vec<&str> = "ouais c'est grave cool".split_whitespace().collect();
    let score = classifier.score(&tokens);
    println!(
        "   LIT = {:.3e}  ORAL = {:.3e}  ->  {}",
        score.totals.lit,
        score.totals.oral,
        score.verdict()
    );

    // Example 3: Nothing but unseen words
    println!("\n3. Classifying 'xylophone quasar':");
    let tokens: Vec<&str> = "xylophone quasar".split_whitespace().collect();
    let score = classifier.score(&tokens);
    println!(
        "   LIT = {:.3e}  ORAL = {:.3e}  ->  {}",
        score.totals.lit,
        score.totals.oral,
        score.verdict()
    );

    // Example 4: Batch classification with a summary
    println!("\n4. Batch classification:");
    let lines = [
        "le gouvernement a adopté la loi",
        "wesh ça va",
        "la séance est levée",
        "zorglub",
    ];
    let sentences: Vec<Vec<String>> = lines
        .iter()
        .map(|line| line.split_whitespace().map(String::from).collect())
        .collect();

    let scores = classifier.classify_batch(&sentences);
    let mut summary = BatchSummary::new();
    for (line, score) in lines.iter().zip(&scores) {
        summary.record(score.verdict(), line.split_whitespace().count());
        println!("   {:<4} {}", score.verdict(), line);
    }
    println!(
        "\n   {} sentences: {} LIT, {} ORAL, {} UNK",
        summary.sentences, summary.lit, summary.oral, summary.unknown
    );

    Ok(())
}
