//! Exercises the builder the way an emitted wiring module drives it:
//! beans constructed in topological order, collaborators passed along,
//! lifecycle adapters registered as construction proceeds.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wicker::builder::{BeanRegistration, BeanScopeBuilder};
use wicker::entry::{BeanContract, TypeKey};
use wicker::lifecycle::{BeanLifecycle, ErrorPtr};

struct Pump {
    pumped: AtomicUsize,
}

impl Pump {
    fn pump_water(&self) {
        self.pumped.fetch_add(1, Ordering::SeqCst);
    }
}

impl BeanContract for Pump {
    const TYPE_NAME: &'static str = "coffee.Pump";
}

struct Grinder;

impl Grinder {
    fn grind(&self) -> &'static str {
        "ground"
    }
}

impl BeanContract for Grinder {
    const TYPE_NAME: &'static str = "coffee.Grinder";
}

struct CoffeeMaker {
    pump: Arc<Pump>,
    grinder: Arc<Grinder>,
    init_count: AtomicUsize,
    close_count: AtomicUsize,
}

impl CoffeeMaker {
    fn new(pump: Arc<Pump>, grinder: Arc<Grinder>) -> Self {
        Self {
            pump,
            grinder,
            init_count: AtomicUsize::new(0),
            close_count: AtomicUsize::new(0),
        }
    }

    fn make_it(&self) -> &'static str {
        self.pump.pump_water();
        self.grinder.grind();
        "done"
    }
}

impl BeanContract for CoffeeMaker {
    const TYPE_NAME: &'static str = "coffee.CoffeeMaker";
}

/// The adapter an emitter writes for a bean with lifecycle methods.
struct CoffeeMakerLifecycle(Arc<CoffeeMaker>);

impl BeanLifecycle for CoffeeMakerLifecycle {
    fn post_construct(&self) -> Result<(), ErrorPtr> {
        self.0.init_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn pre_destroy(&self) -> Result<(), ErrorPtr> {
        self.0.close_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// The shape of a generated module: leaves first, then their dependents.
fn coffee_module(builder: &mut BeanScopeBuilder) {
    let pump = Arc::new(Pump {
        pumped: AtomicUsize::new(0),
    });
    builder.register(
        BeanRegistration::new(pump.clone()).type_key(TypeKey::of::<Pump>(Pump::TYPE_NAME)),
    );

    let grinder = Arc::new(Grinder);
    builder.register(
        BeanRegistration::new(grinder.clone())
            .type_key(TypeKey::of::<Grinder>(Grinder::TYPE_NAME)),
    );

    let maker = Arc::new(CoffeeMaker::new(pump, grinder));
    builder.register(
        BeanRegistration::new(maker.clone())
            .type_key(TypeKey::of::<CoffeeMaker>(CoffeeMaker::TYPE_NAME)),
    );
    builder.register_lifecycle(Arc::new(CoffeeMakerLifecycle(maker)));
}

#[test]
fn should_wire_and_drive_lifecycle() {
    let mut builder = BeanScopeBuilder::new();
    coffee_module(&mut builder);
    let scope = builder.build();

    scope.start().unwrap();
    let maker = scope.get::<CoffeeMaker>(None).unwrap().unwrap();
    assert_eq!(maker.make_it(), "done");
    assert_eq!(maker.pump.pumped.load(Ordering::SeqCst), 1);
    assert_eq!(maker.init_count.load(Ordering::SeqCst), 1);

    scope.close().unwrap();
    scope.close().unwrap();
    assert_eq!(maker.init_count.load(Ordering::SeqCst), 1);
    assert_eq!(maker.close_count.load(Ordering::SeqCst), 1);
}

#[test]
fn should_resolve_collaborators_registered_by_module() {
    let mut builder = BeanScopeBuilder::new();
    coffee_module(&mut builder);
    let scope = builder.build();

    assert!(scope.get::<Pump>(None).unwrap().is_some());
    assert!(scope.get::<Grinder>(None).unwrap().is_some());
    let maker = scope.get::<CoffeeMaker>(None).unwrap().unwrap();
    let pump = scope.get::<Pump>(None).unwrap().unwrap();
    // the module shares instances, the scope does not clone them
    assert!(Arc::ptr_eq(&maker.pump, &pump));
}
