use legend_directory::query::{leaderboard, podium, sort_by_xp, summarize, tier_progress};
use legend_directory::{filter_by_search, CategorySelection, Directory};

fn main() {
    let directory = Directory::new().unwrap();

    let summary = summarize(directory.legends());
    println!(
        "{} legends, {} XP combined, {} featured",
        summary.legends, summary.total_xp, summary.featured
    );

    let selection: CategorySelection = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("all")
        .parse()
        .unwrap();
    let query = std::env::args().nth(2).unwrap_or_default();

    let legends = filter_by_search(&query, directory.select(selection));
    for entry in leaderboard(legends.iter().copied()) {
        let progress = tier_progress(entry.legend.xp);
        println!(
            "#{:<2} {:<20} {:>7} XP  {:<11} {:>5.1}%",
            entry.rank, entry.legend.name, entry.legend.xp, entry.tier, progress.percent
        );
    }

    let ranked = sort_by_xp(legends);
    let top = podium(&ranked);
    let names: Vec<&str> = top.iter().map(|l| l.name.as_str()).collect();
    println!("Podium: {}", names.join(" | "));

    serde_json::to_writer_pretty(std::io::stdout(), &ranked).unwrap();
    println!();
}
