use throw_guard::{guard, throw, when, ErrorKind, Guard, Result};

struct ServerConfig {
    host: String,
    port: u16,
    workers: usize,
    upstreams: Vec<String>,
}

fn build_config(
    host: Option<&str>,
    port: u16,
    workers: usize,
    upstreams: Vec<String>,
) -> Result<ServerConfig> {
    let host = guard!(host).if_null_or_whitespace()?;
    let port = guard!(port).if_less_than(1024)?;
    let workers = guard!(workers).if_not_between(1, 64)?;
    let upstreams = guard!(upstreams)
        .if_empty()
        .and_then(|u| Guard::new(u).named("upstreams").if_any_element_null_or_whitespace())?;

    Ok(ServerConfig {
        host: host.to_owned(),
        port,
        workers,
        upstreams,
    })
}

fn drain(queue_closed: bool) -> Result<()> {
    when::invalid_op_when(|| queue_closed, Some("queue is closed"))?;
    throw::not_implemented(None)
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    // 1. Every guard hands its input back when the check passes
    println!("1. [VALID INPUT]");
    if let Ok(config) = build_config(Some("0.0.0.0"), 8080, 8, vec!["10.0.0.2:9000".into()]) {
        println!(
            "   {}:{} with {} workers -> {:?}\n",
            config.host, config.port, config.workers, config.upstreams
        );
    }

    // 2. The first failing guard raises, attributed to the argument
    let failures = [
        build_config(None, 8080, 8, vec!["a".into()]),
        build_config(Some("  "), 8080, 8, vec!["a".into()]),
        build_config(Some("localhost"), 80, 8, vec!["a".into()]),
        build_config(Some("localhost"), 8080, 0, vec!["a".into()]),
        build_config(Some("localhost"), 8080, 8, Vec::new()),
        build_config(Some("localhost"), 8080, 8, vec!["a".into(), String::new()]),
    ];

    println!("2. [REJECTED INPUT]");
    for result in failures {
        if let Err(err) = result {
            println!("   {:<18} {}", format!("{:?}", err.kind()), err);
        }
    }

    // 3. Structured view for log pipelines
    println!("\n3. [STRUCTURED LOG]");
    if let Err(err) = build_config(Some("localhost"), 8080, 100, vec!["a".into()]) {
        err.with_violation_log(|log| {
            println!("   Code:    {}", log.code());
            println!("   Kind:    {}", log.kind());
            println!("   Arg:     {}", log.arg_name().unwrap_or("-"));
            println!("   Message: {}", log.message());
        });
    }

    // 4. Predicate helpers and terminal dispatch
    println!("\n4. [HELPERS]");
    for closed in [true, false] {
        match drain(closed) {
            Err(err) if err.kind() == ErrorKind::InvalidOperation => println!("   refused: {}", err),
            Err(err) => println!("   {}: {}", err.code(), err),
            Ok(()) => println!("   drained"),
        }
    }
}
