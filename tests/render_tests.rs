use twiml::{
    ClientAttr, ConferenceAttr, DialAttr, EnqueueAttr, GatherAttr, NumberAttr, PauseAttr,
    PlayAttr, RecordAttr, RedirectAttr, Response, SayAttr, SipAttr,
};

fn render(response: &Response) -> Result<String, Box<dyn std::error::Error>> {
    let mut sink = Vec::new();
    response.to_xml(&mut sink)?;
    Ok(String::from_utf8(sink)?)
}

#[test]
fn test_empty_response() -> Result<(), Box<dyn std::error::Error>> {
    let response = Response::new();
    assert_eq!(render(&response)?, "<Response></Response>");
    Ok(())
}

#[test]
fn test_say() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.say("Hello, world!", SayAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Say>Hello, world!</Say>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_say_with_attributes() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.say(
        "Hello",
        SayAttr {
            voice: "alice".to_string(),
            loop_count: 2,
            language: "en-GB".to_string(),
        },
    );
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Say voice=\"alice\" loop=\"2\" language=\"en-GB\">Hello</Say>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_dial_simple() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.dial_simple("+12223334455", DialAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Dial>+12223334455</Dial>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_dial_number() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response
        .dial(DialAttr::default())
        .number("+12223334455", NumberAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Dial>\n    <Number>+12223334455</Number>\n  </Dial>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_dial_conference() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.dial(DialAttr::default()).conference(
        "Conference",
        ConferenceAttr {
            record: "do-not-record".to_string(),
            ..ConferenceAttr::default()
        },
    );
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Dial>\n    <Conference record=\"do-not-record\">Conference</Conference>\n  </Dial>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_dial_client() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response
        .dial(DialAttr::default())
        .client("client", ClientAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Dial>\n    <Client>client</Client>\n  </Dial>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_dial_sip() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response
        .dial(DialAttr::default())
        .sip("sip", SipAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Dial>\n    <Sip>sip</Sip>\n  </Dial>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_dial_caller_id_attribute_name() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.dial_simple(
        "+12223334455",
        DialAttr {
            caller_id: "+19998887766".to_string(),
            ..DialAttr::default()
        },
    );
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Dial callerId=\"+19998887766\">+12223334455</Dial>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_dial_with_text_and_nouns() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    let dial = response.dial(DialAttr::default());
    dial.value = "fallback".to_string();
    dial.number("+12223334455", NumberAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Dial>fallback\n    <Number>+12223334455</Number>\n  </Dial>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_record() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.record(RecordAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Record></Record>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_record_boolean_attributes() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.record(RecordAttr {
        play_beep: true,
        transcribe: false,
        ..RecordAttr::default()
    });
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Record playBeep=\"true\"></Record>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_hangup() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.hangup();
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Hangup></Hangup>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_reject() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.reject();
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Reject></Reject>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_pause() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.pause(PauseAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Pause></Pause>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_pause_length() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.pause(PauseAttr { length: 5 });
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Pause length=\"5\"></Pause>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_play() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.play("value", PlayAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Play>value</Play>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_gather_say() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response
        .gather(GatherAttr::default())
        .say("Hello, world!", SayAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Gather>\n    <Say>Hello, world!</Say>\n  </Gather>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_gather_play() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response
        .gather(GatherAttr::default())
        .play("value", PlayAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Gather>\n    <Play>value</Play>\n  </Gather>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_gather_pause() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response
        .gather(GatherAttr::default())
        .pause(PauseAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Gather>\n    <Pause></Pause>\n  </Gather>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_gather_mixed_prompts_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    let gather = response.gather(GatherAttr {
        num_digits: 4,
        ..GatherAttr::default()
    });
    gather.say("Enter your PIN", SayAttr::default());
    gather.pause(PauseAttr { length: 1 });
    gather.play("http://example.com/beep.wav", PlayAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Gather numDigits=\"4\">\n    <Say>Enter your PIN</Say>\n    <Pause length=\"1\"></Pause>\n    <Play>http://example.com/beep.wav</Play>\n  </Gather>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_redirect() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.redirect(
        "http://example.com/next",
        RedirectAttr {
            method: "POST".to_string(),
        },
    );
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Redirect method=\"POST\">http://example.com/next</Redirect>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_enqueue() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.enqueue(
        "support",
        EnqueueAttr {
            action: "/queue-done".to_string(),
            ..EnqueueAttr::default()
        },
    );
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Enqueue action=\"/queue-done\">support</Enqueue>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_verbs_render_in_append_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.say("first", SayAttr::default());
    response.play("second", PlayAttr::default());
    response.pause(PauseAttr::default());
    response.hangup();
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Say>first</Say>\n  <Play>second</Play>\n  <Pause></Pause>\n  <Hangup></Hangup>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_text_content_is_escaped() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.say("Tom & Jerry <live>", SayAttr::default());
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Say>Tom &amp; Jerry &lt;live&gt;</Say>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_attribute_value_is_escaped() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.play(
        "beep",
        PlayAttr {
            digits: "w\"1\"".to_string(),
            ..PlayAttr::default()
        },
    );
    assert_eq!(
        render(&response)?,
        "<Response>\n  <Play digits=\"w&quot;1&quot;\">beep</Play>\n</Response>"
    );
    Ok(())
}

#[test]
fn test_to_xml_string_matches_sink_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = Response::new();
    response.say("Hello", SayAttr::default());
    response.dial(DialAttr::default()).number(
        "+12223334455",
        NumberAttr {
            send_digits: "ww12".to_string(),
            ..NumberAttr::default()
        },
    );
    assert_eq!(render(&response)?, response.to_xml_string());
    Ok(())
}
