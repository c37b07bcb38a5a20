//! Daily report email: rendering and SMTP delivery

use anyhow::{Context, Result};
use lettre::{
    Message, Transport,
    message::MultiPart,
    transport::smtp::SmtpTransport,
    transport::smtp::authentication::Credentials,
};
use std::env;

use crate::models::Subscription;
use crate::scoring::TripReport;

const SCALE_REMINDER: &str =
    "Reminder: < 5 is great; 5-10 is fine; 11-15 sucks; 16-20 is horrendous; 21+ is a legendary failure.";

fn create_mailer() -> Result<SmtpTransport> {
    let gmail_address = env::var("GMAIL_ADDRESS").context("Missing GMAIL_ADDRESS env var")?;
    let gmail_app_password =
        env::var("GMAIL_APP_PASSWORD").context("Missing GMAIL_APP_PASSWORD env var")?;

    let credentials = Credentials::new(gmail_address, gmail_app_password);

    let mailer = SmtpTransport::relay("smtp.gmail.com")?
        .credentials(credentials)
        .build();

    Ok(mailer)
}

/// Send the daily report for one subscriber
pub async fn send_report(
    subscription: &Subscription,
    departure: &TripReport,
    ret: &TripReport,
) -> Result<()> {
    tracing::info!("Sending report to {}", subscription.email);

    let gmail_address = env::var("GMAIL_ADDRESS").context("Missing GMAIL_ADDRESS env var")?;
    let (text, html) = render_contents(subscription, departure, ret);

    let email = Message::builder()
        .from(
            format!("RideForecast <{}>", gmail_address)
                .parse()
                .context("Failed to parse from address")?,
        )
        .to(subscription
            .email
            .parse()
            .context("Failed to parse to address")?)
        .subject("RideForecast: Your Daily Commute Report")
        .multipart(MultiPart::alternative_plain_html(text, html))?;

    let mailer = create_mailer()?;

    mailer.send(&email).context("Failed to send email")?;

    tracing::info!("Sent report to {}", subscription.email);

    Ok(())
}

/// Render the plain-text and HTML bodies of the daily report
#[must_use]
pub fn render_contents(
    subscription: &Subscription,
    departure: &TripReport,
    ret: &TripReport,
) -> (String, String) {
    let distance_km = subscription.home.distance_km(subscription.destination);

    let text = format!(
        "Hey {name}!\n\
        \n\
        Your commute: {home} -> {destination} (~{distance_km:.1} km each way)\n\
        \n\
        {departure_leg}\n\
        {return_leg}\
        \n\
        {reminder}\n",
        name = subscription.name,
        home = subscription.home.format_coordinates(),
        destination = subscription.destination.format_coordinates(),
        departure_leg = render_leg_text("Departure", subscription.departure_time, departure),
        return_leg = render_leg_text("Return", subscription.return_time, ret),
        reminder = SCALE_REMINDER,
    );

    let html = format!(
        "<html>\n\
        <head></head>\n\
        <body>\n\
            <h1>Hey {name}!</h1>\n\
            <p>Your commute: {home} &rarr; {destination} (~{distance_km:.1} km each way)</p>\n\
        {departure_leg}\
        {return_leg}\
            <br>\n\
            <em>{reminder}</em>\n\
        </body>\n\
        </html>\n",
        name = subscription.name,
        home = subscription.home.format_coordinates(),
        destination = subscription.destination.format_coordinates(),
        departure_leg = render_leg_html("Departure", subscription.departure_time, departure),
        return_leg = render_leg_html("Return", subscription.return_time, ret),
        reminder = SCALE_REMINDER,
    );

    (text, html)
}

fn format_time_code(code: u16) -> String {
    format!("{:02}:{:02}", code / 100, code % 100)
}

fn render_leg_text(label: &str, time_code: u16, report: &TripReport) -> String {
    format!(
        "{label} at {time}, traveling at {bearing} degrees north\n\
        \x20 Total suckiness: {total} points\n\
        \x20   Wind: {wind} ({speed} km/h from {deg} degrees north)\n\
        \x20   Temp: {temp} (min {tmin} C, max {tmax} C, humidity {humidity}%)\n\
        \x20   Rain: {rain} ({mm} mm/3h)\n\
        \x20   Clouds: {clouds} ({pct}% cover)\n",
        time = format_time_code(time_code),
        bearing = report.bearing,
        total = report.scores.total(),
        wind = report.scores.wind,
        speed = report.snapshot.wind.speed,
        deg = report.snapshot.wind.deg,
        temp = report.scores.temperature,
        tmin = report.snapshot.temp.min,
        tmax = report.snapshot.temp.max,
        humidity = report.snapshot.humidity,
        rain = report.scores.rain,
        mm = report.snapshot.rain,
        clouds = report.scores.clouds,
        pct = report.snapshot.clouds,
    )
}

fn render_leg_html(label: &str, time_code: u16, report: &TripReport) -> String {
    format!(
        "    <h3>{label} at {time}, traveling at {bearing} degrees north</h3>\n\
        \x20   <h4>Total suckiness: {total} points</h4>\n\
        \x20   <ul>\n\
        \x20       <li>\n\
        \x20           Wind: {wind} points\n\
        \x20           <ul>\n\
        \x20               <li>Speed: {speed} km/hour</li>\n\
        \x20               <li>Direction: {deg} degrees north</li>\n\
        \x20           </ul>\n\
        \x20       </li>\n\
        \x20       <li>\n\
        \x20           Temp: {temp} points\n\
        \x20           <ul>\n\
        \x20               <li>Min: {tmin} degrees Celsius</li>\n\
        \x20               <li>Max: {tmax} degrees Celsius</li>\n\
        \x20               <li>Humidity: {humidity}%</li>\n\
        \x20           </ul>\n\
        \x20       </li>\n\
        \x20       <li>\n\
        \x20           Rain: {rain} points\n\
        \x20           <ul>\n\
        \x20               <li>{mm} mm/3h</li>\n\
        \x20           </ul>\n\
        \x20       </li>\n\
        \x20       <li>\n\
        \x20           Clouds: {clouds} points\n\
        \x20           <ul>\n\
        \x20               <li>{pct}%</li>\n\
        \x20           </ul>\n\
        \x20       </li>\n\
        \x20   </ul>\n",
        time = format_time_code(time_code),
        bearing = report.bearing,
        total = report.scores.total(),
        wind = report.scores.wind,
        speed = report.snapshot.wind.speed,
        deg = report.snapshot.wind.deg,
        temp = report.scores.temperature,
        tmin = report.snapshot.temp.min,
        tmax = report.snapshot.temp.max,
        humidity = report.snapshot.humidity,
        rain = report.scores.rain,
        mm = report.snapshot.rain,
        clouds = report.scores.clouds,
        pct = report.snapshot.clouds,
    )
}
