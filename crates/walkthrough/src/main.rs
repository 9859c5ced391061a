//! Scripted tour of the domain model, logged through tracing.

use anyhow::Context;

use kinship_family::Family;
use kinship_jobs::Job;
use kinship_money::Money;
use kinship_people::Person;

fn main() -> anyhow::Result<()> {
    kinship_observability::init();

    let ten_usd = Money::new(10, "USD");
    let ten_eur = Money::new(10, "EUR");
    tracing::info!(
        gbp = %Money::new(100, "USD").convert("GBP"),
        sum = %ten_usd.add(&ten_eur),
        difference = %ten_usd.subtract(&ten_eur),
        "money"
    );

    let ted = Person::shared("Ted", "Neward", 45);
    let charlotte = Person::shared("Charlotte", "Neward", 45);
    ted.borrow_mut().set_job(Some(Job::salaried("Guest Lecturer", 1000)));
    charlotte.borrow_mut().set_job(Some(Job::hourly("Consultant", 15.5)));

    let mut family = Family::try_new(&ted, &charlotte).context("founding the Neward family")?;

    let mike = Person::shared("Mike", "Neward", 22);
    mike.borrow_mut().set_job(Some(Job::hourly("Burger-Flipper", 5.5)));
    if !family.have_child(mike) {
        anyhow::bail!("no member of the Neward family is old enough to add a child");
    }

    if let Some(job) = ted.borrow_mut().job_mut() {
        job.raise_by_percent(0.1);
    }

    for member in family.members() {
        tracing::info!(person = %member.borrow().describe(), "member");
    }
    tracing::info!(income = family.household_income(), "household income");

    let abbie = Person::shared("Abbie", "Smith", 15);
    abbie.borrow_mut().set_job(Some(Job::hourly("Lifeguard", 9.0)));
    tracing::info!(person = %abbie.borrow().describe(), "job cleared by age gate");

    let remarriage = Family::new(&ted, &abbie);
    tracing::info!(members = remarriage.len(), "already-married founder yields an empty family");

    Ok(())
}
