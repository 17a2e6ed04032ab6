//! Given steps for person record BDD scenarios.

use super::world::{PersonWorld, build_request, run_async};
use eyre::WrapErr;
use person_registry::person::domain::Person;
use rstest_bdd_macros::given;

#[given(r#"a registration request for "{name}" with CPF "{cpf}" and email "{email}""#)]
fn registration_request(
    world: &mut PersonWorld,
    name: String,
    cpf: String,
    email: String,
) -> Result<(), eyre::Report> {
    world.pending_request = Some(build_request(&name, &cpf, &email)?);
    Ok(())
}

#[given(r#"a registered person "{name}" with CPF "{cpf}" and email "{email}""#)]
fn registered_person(
    world: &mut PersonWorld,
    name: String,
    cpf: String,
    email: String,
) -> Result<(), eyre::Report> {
    let request = build_request(&name, &cpf, &email)?;
    let created =
        run_async(world.service.create(request)).wrap_err("register person for scenario")?;
    world.registered.push(created);
    Ok(())
}

#[given("the last registered person has already been removed")]
fn person_already_removed(world: &mut PersonWorld) -> Result<(), eyre::Report> {
    let id = world
        .registered
        .last()
        .map(Person::id)
        .ok_or_else(|| eyre::eyre!("no registered person in scenario world"))?;
    run_async(world.service.remove(id)).wrap_err("remove person for scenario")?;
    Ok(())
}
