//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::scoring::ScoreCalculator;
use crate::lexicon::Lexicon;
use crate::showcase::Example;
use crate::{
    Comparison, Dimension, EnhancementResult, FileReport, Grade, Priority, Suggestion,
    MAX_DIMENSION_SCORE,
};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
    /// Source of category templates for verbose enhancement output
    lexicon: Option<Lexicon>,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
            lexicon: None,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Look up category templates in `lexicon`
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Report a single analysis result
    pub fn report(&self, result: &FileReport) {
        self.print_header(result);
        self.print_score(result);
        self.print_breakdown(result);

        if !result.report.suggestions.is_empty() {
            self.print_suggestions(&result.report.suggestions);
        }
        println!();

        if let Some(ref enhancement) = result.enhancement {
            let template = self
                .lexicon
                .as_ref()
                .and_then(|l| l.template_for(enhancement.category));
            self.report_enhancement(enhancement, template);
        }
    }

    /// Report multiple results with summary
    pub fn report_many(&self, results: &[FileReport], stats: &AggregateStats) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, result: &FileReport) {
        let grade_colored = self.colorize_grade(&result.report.grade);
        println!(
            "{}: {} ({})",
            result.file_path.display(),
            result.report.total_score,
            grade_colored
        );
    }

    /// Print the rewritten prompt, what changed and the word-count delta.
    /// `template` is the category skeleton, shown in verbose mode.
    pub fn report_enhancement(&self, result: &EnhancementResult, template: Option<&str>) {
        println!(
            "   {} ({})",
            "Enhanced Prompt:".bold(),
            result.category.to_string().cyan()
        );

        if result.improvements.is_empty() {
            println!("   {}", "No changes needed".dimmed());
        } else {
            println!();
            for line in result.enhanced.lines() {
                println!("   {}", line.italic());
            }
            println!();
            for improvement in &result.improvements {
                println!("   {} {}", "✓".green(), improvement);
            }
        }

        println!("   {}", format_comparison(&result.comparison).dimmed());

        if self.verbose {
            if let Some(template) = template {
                println!("   {} {}", "Template:".dimmed(), template.dimmed());
            }
        }
        println!();
    }

    /// Print the example catalogue
    pub fn report_examples(&self, examples: &[Example]) {
        for example in examples {
            println!();
            println!("{}", example.category.bold());
            println!("   {} {}", "Before:".red(), example.before);
            println!("   {} {}", "After: ".green(), example.after);
            for improvement in example.improvements {
                println!("   {} {}", "✓".green(), improvement);
            }
        }
        println!();
    }

    fn print_header(&self, result: &FileReport) {
        println!();
        println!(
            "{}",
            format!("Prompt Quality Analysis: {}", result.file_path.display()).bold()
        );
        println!(
            "   Words: {} | Sentences: {}",
            result.report.analysis.word_count, result.report.analysis.sentence_count
        );
        println!();
    }

    fn print_score(&self, result: &FileReport) {
        let grade_str = self.colorize_grade(&result.report.grade);
        let score_bar = self.create_score_bar(result.report.total_score);

        println!("   Score: {} {}", score_bar, grade_str.bold());
        println!(
            "   {}",
            ScoreCalculator::grade_description(result.report.grade).dimmed()
        );
        println!();
    }

    fn print_breakdown(&self, result: &FileReport) {
        println!("   {}", "Score Breakdown:".bold());

        for dimension in Dimension::ALL {
            let score = result.report.scores.get(dimension);
            let bar = self.create_mini_bar(score, MAX_DIMENSION_SCORE);
            let score_str = format!("{:>2}/{}", score, MAX_DIMENSION_SCORE);
            let colored_score = if score >= 20 {
                score_str.green()
            } else if score >= 15 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!("   {} {} {}", bar, colored_score, dimension.title());

            if self.verbose {
                println!("       {} {}", "↳".dimmed(), dimension.description().dimmed());
            }
        }
        println!();
    }

    fn print_suggestions(&self, suggestions: &[Suggestion]) {
        println!("   {}", "Suggestions:".bold());

        // High first, then medium, then low; stable within a priority
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            for suggestion in suggestions.iter().filter(|s| s.priority == priority) {
                let icon = match priority {
                    Priority::High => "✗".red(),
                    Priority::Medium => "⚠".yellow(),
                    Priority::Low => "ℹ".blue(),
                };
                println!(
                    "   {} [{}] {}",
                    icon,
                    suggestion.dimension.to_string().dimmed(),
                    suggestion.message
                );
            }
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Prompts analyzed: {}",
            stats.files_analyzed.to_string().bold()
        );
        println!(
            "   Average score:    {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_grade(&stats.average_grade)
        );
        println!("   Suggestions:      {}", stats.total_suggestions);
        if let Some((ref path, score)) = stats.lowest {
            println!("   Lowest:           {} ({})", path.display(), score);
        }
        println!();
    }

    fn colorize_grade(&self, grade: &Grade) -> colored::ColoredString {
        let s = grade.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match grade {
            Grade::A => s.green().bold(),
            Grade::B => s.green(),
            Grade::C => s.yellow(),
            Grade::D => s.red(),
            Grade::F => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let bar = score_bar(score);

        if self.use_colors {
            if score >= 80 {
                bar.green().to_string()
            } else if score >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: u8, max: u8) -> String {
        let filled = ((score as usize * 10) / max.max(1) as usize).min(10);
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// `[████░░…]  38%` style bar, 20 cells wide
fn score_bar(score: u8) -> String {
    let filled = (score.min(100) as usize * 20) / 100;
    let empty = 20 - filled;
    format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score)
}

/// One-line word-count summary of an enhancement
pub fn format_comparison(comparison: &Comparison) -> String {
    let ratio = comparison
        .ratio
        .map(|r| format!(", {:.2}x", r))
        .unwrap_or_default();
    format!(
        "Words: {} → {} ({:+}{})",
        comparison.original_word_count, comparison.enhanced_word_count, comparison.delta, ratio
    )
}
