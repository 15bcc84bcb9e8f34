use creational_factories::{
    Console, DimensionPolicy, FactoryConfig, FactoryError, adapters::MemoryConsole,
    factories::{DoorFactory, Factories},
};

#[test]
fn door_driver_prints_height_then_width() {
    let door_factory = DoorFactory::new();
    let wooden_door = door_factory.make_door(30, 40);

    let mut console = MemoryConsole::new();
    console.write_line(&wooden_door.height().to_string()).unwrap();
    console.write_line(&wooden_door.width().to_string()).unwrap();

    assert_eq!(console.into_lines(), vec!["40", "30"]);
}

#[test]
fn doors_are_independent_values() {
    let factory = DoorFactory::new();
    let doors: Vec<_> = (0..5).map(|_| factory.make_door(12, 34)).collect();

    for (i, door) in doors.iter().enumerate() {
        assert_eq!((door.width(), door.height()), (12, 34));
        for other in &doors[i + 1..] {
            assert_ne!(door.id(), other.id());
        }
    }
}

#[test]
fn strict_config_rejects_zero_width() -> Result<(), FactoryError> {
    let config = FactoryConfig::from_toml_str(
        r#"
        [door]
        policy = "strict"
        "#,
    )?;
    let factories = Factories::with_config(&config);
    assert_eq!(factories.door().policy(), DimensionPolicy::Strict);

    let result = factories.door().try_make_door(0, 40);
    assert!(matches!(result, Err(FactoryError::InvalidDimension { .. })));

    let door = factories.door().try_make_door(30, 40)?;
    assert_eq!(door.to_string(), "wooden door 30x40");
    Ok(())
}
