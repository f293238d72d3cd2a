use clap::Parser;
use linked_list::command::WALKTHROUGH;
use linked_list::{parse_script, IndexPolicy, LinkedList};

#[derive(Parser, Debug)]
#[clap(about = "Step through singly linked list operations")]
struct CmdOptions {
    /// Commands to run, separated by ";" (push, pop, append, remove_last, node, delete,
    /// insert, reverse, print)
    #[clap(short, long, default_value = WALKTHROUGH)]
    script: String,
    /// Treat indices past the end as absent instead of clamping them to the end
    #[clap(long)]
    strict: bool,
    /// Only print the final list
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    // Initialize the logging library. You can print log messages using the `log` macros:
    // https://docs.rs/log/0.4.8/log/ You are welcome to continue using print! statements; this
    // just looks a little prettier.
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    let commands = match parse_script(&options.script) {
        Ok(commands) => commands,
        Err(err) => {
            log::error!("Could not parse script: {}", err);
            std::process::exit(1);
        }
    };

    let policy = if options.strict {
        IndexPolicy::Strict
    } else {
        IndexPolicy::Clamp
    };
    let mut list: LinkedList<i64> = LinkedList::with_policy(policy);
    log::info!("Running {} commands with {:?} index policy", commands.len(), policy);

    for command in &commands {
        let outcome = command.apply(&mut list);
        if !options.quiet {
            println!("{:<14} => {:<8} {}", command.to_string(), outcome.to_string(), list);
        }
    }
    println!("{}", list);
    log::info!("Finished with {} nodes", list.len());
}
