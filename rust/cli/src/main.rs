use handrank_cli::logging::init_logging;
use handrank_cli::run;

fn main() {
    init_logging();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let code = run(std::env::args(), &mut stdout, &mut stderr);
    std::process::exit(code);
}
