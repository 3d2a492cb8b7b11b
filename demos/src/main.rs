use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::thread;
use std::time::SystemTime;

use motif::behavioral::{chain, command};
use motif::creational::singleton::eager::Singleton;
use motif::creational::{abstract_factory, builder, factory_method};
use motif::structural::{bridge, decorator, facade, flyweight, proxy};
use motif::{CloneCopier, DeepCopy, MarshalCopier, PrototypeArena, SingletonRegistry};

#[derive(Parser)]
#[command(name = "motif-demos")]
#[command(about = "Illustrative drivers for the motif design patterns", long_about = None)]
struct Cli {
    /// Log verbosely (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Demo,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    /// Chain of responsibility: Monkey > Cat > Dog
    Chain,
    /// Command: an invoker running start/finish commands
    Command,
    /// Abstract factory: two product families
    AbstractFactory,
    /// Builder: director-driven and manual construction
    Builder,
    /// Factory method: two creators
    FactoryMethod,
    /// Prototype: cloning a node with a back-reference
    Prototype {
        /// Deep-copy capability used for the component
        #[arg(long, value_enum, default_value_t = Copier::Marshal)]
        copier: Copier,
    },
    /// Eager singleton: two lookups, one instance
    Singleton,
    /// Thread-safe singleton: two threads racing with FOO and BAR
    SingletonThreads,
    /// Bridge: abstractions paired with implementations
    Bridge,
    /// Decorator: stacking decorators on a component
    Decorator,
    /// Facade: one call over two subsystems
    Facade,
    /// Flyweight: a police database of cars
    Flyweight,
    /// Proxy: access checks around a real subject
    Proxy,
    /// Run every demo in turn
    All,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Copier {
    Clone,
    Marshal,
}

const EVERY_DEMO: [Demo; 13] = [
    Demo::Chain,
    Demo::Command,
    Demo::AbstractFactory,
    Demo::Builder,
    Demo::FactoryMethod,
    Demo::Prototype { copier: Copier::Marshal },
    Demo::Singleton,
    Demo::SingletonThreads,
    Demo::Bridge,
    Demo::Decorator,
    Demo::Facade,
    Demo::Flyweight,
    Demo::Proxy,
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Demo::All => {
            for demo in EVERY_DEMO {
                writeln!(out, "===== {demo:?} =====")?;
                run(demo, &mut out)?;
                writeln!(out)?;
            }
        }
        demo => run(demo, &mut out)?,
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("motif_demos=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(demo: Demo, out: &mut impl Write) -> Result<()> {
    let _span = tracing::info_span!("demo", ?demo).entered();
    tracing::debug!("starting");

    match demo {
        Demo::Chain => run_chain(out),
        Demo::Command => run_command(out),
        Demo::AbstractFactory => run_abstract_factory(out),
        Demo::Builder => run_builder(out),
        Demo::FactoryMethod => run_factory_method(out),
        Demo::Prototype { copier: Copier::Clone } => run_prototype(CloneCopier, out),
        Demo::Prototype { copier: Copier::Marshal } => run_prototype(MarshalCopier, out),
        Demo::Singleton => run_singleton(out),
        Demo::SingletonThreads => run_singleton_threads(out),
        Demo::Bridge => run_bridge(out),
        Demo::Decorator => run_decorator(out),
        Demo::Facade => run_facade(out),
        Demo::Flyweight => run_flyweight(out),
        Demo::Proxy => run_proxy(out),
        Demo::All => unreachable!("`all` is expanded by main"),
    }
    .with_context(|| format!("{demo:?} demo failed"))
}

fn run_chain(out: &mut impl Write) -> Result<()> {
    let cat = chain::CatHandler::default().set_next(chain::DogHandler::default());
    // The subchain is run separately, so it gets its own copy of the tail.
    let subchain = chain::CatHandler::default().set_next(chain::DogHandler::default());
    let monkey = chain::MonkeyHandler::default().set_next(cat);

    writeln!(out, "Chain: Monkey > Cat > Dog")?;
    chain::client_code(&monkey, out)?;
    write!(out, "\n\n")?;
    writeln!(out, "Subchain: Cat > Dog")?;
    chain::client_code(&subchain, out)?;
    Ok(())
}

fn run_command(out: &mut impl Write) -> Result<()> {
    let mut invoker = command::Invoker::new();
    invoker.set_on_start(command::SimpleCommand::new("Say Hello!"));
    invoker.set_on_finish(command::ComplexCommand::new(
        command::Receiver,
        "Send email",
        "Save report",
    ));
    invoker.do_something_important(out)?;
    Ok(())
}

fn run_abstract_factory(out: &mut impl Write) -> Result<()> {
    use abstract_factory::{client_code, ConcreteFactory1, ConcreteFactory2};

    writeln!(out, "{:?}", "Client: Testing client code with the first factory type:")?;
    for line in client_code(&ConcreteFactory1) {
        writeln!(out, "{line:?}")?;
    }
    writeln!(out, "{:?}", "Client: Testing the same client code with the second factory type:")?;
    for line in client_code(&ConcreteFactory2) {
        writeln!(out, "{line:?}")?;
    }
    Ok(())
}

fn run_builder(out: &mut impl Write) -> Result<()> {
    use builder::Builder as _;

    let director = builder::Director;
    let mut builder = builder::ConcreteBuilder1::new();

    writeln!(out, "Standard basic product:")?;
    director.build_minimal_viable_product(&mut builder);
    writeln!(out, "{}", builder.product().list_parts())?;
    writeln!(out)?;

    writeln!(out, "Standard full featured product:")?;
    director.build_full_featured_product(&mut builder);
    writeln!(out, "{}", builder.product().list_parts())?;
    writeln!(out)?;

    writeln!(out, "Custom product:")?;
    builder.produce_part_a();
    builder.produce_part_b();
    builder.produce_part_c();
    writeln!(out, "{}", builder.product().list_parts())?;
    Ok(())
}

fn run_factory_method(out: &mut impl Write) -> Result<()> {
    use factory_method::{ConcreteCreator1, ConcreteCreator2, Creator};

    let launches: [(&str, &dyn Creator); 2] = [
        ("ConcreteCreator1", &ConcreteCreator1),
        ("ConcreteCreator2", &ConcreteCreator2),
    ];
    for (name, creator) in launches {
        writeln!(out, "{:?}", format!("App: Launched with the {name}."))?;
        writeln!(out, "{:?}", "Client: I'm not aware of the creator's class, but it still works.")?;
        writeln!(out, "{:?}", creator.some_operation())?;
    }
    Ok(())
}

fn run_prototype<D: DeepCopy<SystemTime>>(copier: D, out: &mut impl Write) -> Result<()> {
    PrototypeArena::<SystemTime, D>::scope_with(copier, |mut arena| -> Result<()> {
        let p1 = arena.insert(245, SystemTime::now());
        let p2 = arena.clone_node(p1).context("Failed to clone the prototype")?;
        tracing::debug!(original = ?p1, clone = ?p2, "cloned");

        let (o, c) = (&arena[p1], &arena[p2]);

        if o.primitive() == c.primitive() {
            writeln!(out, "Primitive field values have been carried over to a clone. Yay!")?;
        } else {
            writeln!(out, "Primitive field values have not been copied. Booo!")?;
        }

        if std::ptr::eq(o.component(), c.component()) {
            writeln!(out, "Simple component has not been cloned. Booo!")?;
        } else {
            writeln!(out, "Simple component has been cloned. Yay!")?;
        }

        if std::ptr::eq(o.backref(), c.backref()) {
            writeln!(out, "Component with back reference has not been cloned. Booo!")?;
        } else {
            writeln!(out, "Component with back reference has been cloned. Yay!")?;
        }

        if o.backref().owner() == c.backref().owner() {
            writeln!(out, "Component with back reference is linked to original object. Booo!")?;
        } else {
            writeln!(out, "Component with back reference is linked to the clone. Yay!")?;
        }
        Ok(())
    })
}

fn run_singleton(out: &mut impl Write) -> Result<()> {
    let s1 = Singleton::instance();
    let s2 = Singleton::instance();

    if std::ptr::eq(s1, s2) {
        writeln!(out, "Singleton works, both variables contain the same instance.")?;
    } else {
        writeln!(out, "Singleton failed, variables contain different instances.")?;
    }
    Ok(())
}

fn run_singleton_threads(out: &mut impl Write) -> Result<()> {
    writeln!(out, "If you see the same value, then singleton was reused (yay!)")?;
    writeln!(out, "If you see different values, then 2 singletons were created (booo!)")?;
    writeln!(out, "RESULT:")?;

    let registry = SingletonRegistry::new();
    let values = thread::scope(|s| {
        let workers: Vec<_> = ["FOO", "BAR"]
            .into_iter()
            .map(|value| {
                let registry = &registry;
                s.spawn(move || registry.get_instance(value).value().to_owned())
            })
            .collect();

        workers
            .into_iter()
            .map(|worker| {
                worker
                    .join()
                    .map_err(|_| anyhow::anyhow!("singleton worker panicked"))
            })
            .collect::<Result<Vec<_>>>()
    })?;
    tracing::debug!(?values, "workers joined");

    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

fn run_bridge(out: &mut impl Write) -> Result<()> {
    use bridge::{Abstraction, ConcreteImplementationA, ConcreteImplementationB, ExtendedAbstraction, Operation};

    writeln!(out, "{}", Abstraction::new(ConcreteImplementationA).operation())?;
    writeln!(out)?;
    writeln!(out, "{}", ExtendedAbstraction::new(ConcreteImplementationB).operation())?;
    Ok(())
}

fn run_decorator(out: &mut impl Write) -> Result<()> {
    use decorator::{Component, ConcreteComponent, ConcreteDecoratorA, ConcreteDecoratorB};

    writeln!(out, "Client: I've got a simple component:")?;
    writeln!(out, "RESULT: {}", ConcreteComponent.operation())?;
    writeln!(out)?;

    let decorated = ConcreteDecoratorB::new(ConcreteDecoratorA::new(ConcreteComponent));
    writeln!(out, "Client: Now I've got a decorated component:")?;
    writeln!(out, "RESULT: {}", decorated.operation())?;
    Ok(())
}

fn run_facade(out: &mut impl Write) -> Result<()> {
    let facade = facade::Facade::new(Some(facade::Subsystem1), Some(facade::Subsystem2));
    writeln!(out, "{}", facade.operation())?;
    Ok(())
}

fn run_flyweight(out: &mut impl Write) -> Result<()> {
    use flyweight::{add_car_to_police_database, FlyweightFactory};

    let mut factory = FlyweightFactory::new([
        ["Chevrolet", "Camaro2018", "pink"],
        ["Mercedes Benz", "C300", "black"],
        ["Mercedes Benz", "C500", "red"],
        ["BMW", "M5", "red"],
        ["BMW", "X6", "white"],
    ]);

    factory.list_flyweights(out)?;
    add_car_to_police_database(&mut factory, "CL234IR", "James Doe", "BMW", "M5", "red", out)?;
    add_car_to_police_database(&mut factory, "CL234IR", "James Doe", "BMW", "X1", "blue", out)?;
    writeln!(out)?;
    factory.list_flyweights(out)?;
    Ok(())
}

fn run_proxy(out: &mut impl Write) -> Result<()> {
    use proxy::{Proxy, RealSubject, Subject};

    writeln!(out, "Client: Executing the client code with a real subject:")?;
    let real_subject = RealSubject;
    real_subject.request(out)?;
    writeln!(out)?;

    writeln!(out, "Client: Executing the same client code with a proxy:")?;
    Proxy::new(real_subject).request(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(demo: Demo) -> String {
        let mut out = Vec::new();
        run(demo, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_chain_separates_chains_with_two_blank_lines() {
        let text = transcript(Demo::Chain);
        assert!(text.contains(" Dog: I'll eat the Dog Food\n\n\nSubchain: Cat > Dog\n"));
        assert!(!text.contains("\n\n\n\n"));
    }

    #[test]
    fn test_prototype_reports_every_check_passing() {
        for copier in [Copier::Clone, Copier::Marshal] {
            let text = transcript(Demo::Prototype { copier });
            assert_eq!(text.matches("Yay!").count(), 4, "{copier:?}");
            assert!(!text.contains("Booo!"));
        }
    }

    #[test]
    fn test_singleton_threads_agree() {
        let text = transcript(Demo::SingletonThreads);
        let values: Vec<_> = text.lines().skip_while(|l| *l != "RESULT:").skip(1).collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], values[1]);
    }
}
