use std::io::{self, Write};

use clap::Parser;
use ipform_client::{SolveSession, SolverClient, DEFAULT_ENDPOINT};
use ipform_core::{ProblemForm, Relation, SolveResponse};

#[derive(Parser)]
#[command(name = "ipform")]
#[command(about = "Build an integer-programming problem and send it to a solver service", long_about = None)]
struct Cli {
    /// Solver service endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Print the request payload as JSON instead of submitting
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut form = ProblemForm::new();
    if let Err(e) = fill_form(&mut form) {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    }

    if cli.dry_run {
        match serde_json::to_string_pretty(&form.request()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error encoding payload: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut session = SolveSession::new(SolverClient::new(&cli.endpoint));
    match session.submit(&form) {
        Ok(response) => render(response),
        Err(_) => {
            eprintln!("Failed to send the problem to the solver service.");
            std::process::exit(1);
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Walks the user through the form the same way the entry screen does:
/// direction, counts, then the define-and-edit passes over the
/// objective and the constraint rows. Empty input keeps a field's
/// current value.
fn fill_form(form: &mut ProblemForm) -> io::Result<()> {
    println!("=== Integer Programming Problem ===\n");

    let input = prompt("Maximize or minimize? [max]")?;
    if !input.is_empty() {
        match input.parse() {
            Ok(direction) => form.set_direction(direction),
            Err(_) => println!("Unrecognized value, keeping {}", form.direction()),
        }
    }

    let input = prompt(&format!("Number of variables [{}]", form.num_vars()))?;
    if let Ok(n) = input.parse() {
        form.set_num_vars(n);
    }
    form.define_objective();

    println!("\nObjective coefficients:");
    for i in 0..form.num_vars() {
        let input = prompt(&format!("  Coefficient for x{} [0]", i + 1))?;
        if !input.is_empty() {
            form.edit_objective_coeff(i, &input);
        }
    }

    let input = prompt(&format!(
        "\nNumber of constraints [{}]",
        form.num_constraints()
    ))?;
    if let Ok(n) = input.parse() {
        form.set_num_constraints(n);
    }
    form.define_constraints();

    for row in 0..form.num_constraints() {
        println!("\nConstraint {}:", row + 1);
        for var in 0..form.num_vars() {
            let input = prompt(&format!("  Coefficient for x{} [0]", var + 1))?;
            if !input.is_empty() {
                form.edit_constraint_coeff(row, var, &input);
            }
        }
        let input = prompt("  Relation (<=, =, >=) [<=]")?;
        if let Ok(relation) = input.parse::<Relation>() {
            form.edit_constraint_relation(row, relation);
        }
        let input = prompt("  Right-hand side [0]")?;
        if !input.is_empty() {
            form.edit_constraint_rhs(row, &input);
        }
    }
    println!();

    Ok(())
}

fn render(response: &SolveResponse) {
    println!("=== Result ===\n");
    println!("Status: {}", response.status);
    println!("Optimal value: {}", response.optimal_value);
    println!("Variables:");
    for variable in &response.variables {
        println!("  {} = {}", variable.name, variable.value);
    }
}
