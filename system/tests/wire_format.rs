use std::collections::HashMap;
use whiteboard_system::serde_json::{self, json};
use whiteboard_system::uuid::Uuid;
use whiteboard_system::{
    ClientEvent, CursorMoved, DrawingPayload, InitPayload, Participant, Segment, ServerEvent, Stroke,
    StrokeProperties, Tool,
};

fn red_brush() -> StrokeProperties {
    StrokeProperties {
        tool: Tool::Brush,
        color: "#FF0000".into(),
        width: 2.0,
    }
}

fn to_value(event: &ServerEvent) -> serde_json::Value {
    serde_json::from_str(&event.to_json().expect("")).expect("")
}

#[test]
fn it_should_encode_drawing_with_camel_case_fields() {
    let event = ServerEvent::Drawing(DrawingPayload {
        segment: Segment::new(0.0, 0.0, 10.0, 10.0),
        stroke_props: red_brush(),
    });

    assert_eq!(
        to_value(&event),
        json!({
            "event": "drawing",
            "payload": {
                "segment": {"startX": 0.0, "startY": 0.0, "endX": 10.0, "endY": 10.0},
                "strokeProps": {"tool": "brush", "color": "#FF0000", "width": 2.0}
            }
        })
    );
}

#[test]
fn it_should_flatten_stroke_props_in_redraw() {
    let stroke = Stroke {
        props: red_brush(),
        segments: vec![Segment::new(0.0, 0.0, 10.0, 10.0)],
    };
    let event = ServerEvent::Redraw(vec![stroke]);

    assert_eq!(
        to_value(&event),
        json!({
            "event": "redraw",
            "payload": [{
                "tool": "brush",
                "color": "#FF0000",
                "width": 2.0,
                "segments": [{"startX": 0.0, "startY": 0.0, "endX": 10.0, "endY": 10.0}]
            }]
        })
    );
}

#[test]
fn it_should_encode_init_with_self_and_users_keyed_by_id() {
    let id = Uuid::new_v4();
    let me = Participant {
        id,
        color: "#123456".into(),
    };
    let mut all_users = HashMap::new();
    all_users.insert(id, me.clone());

    let event = ServerEvent::Init(InitPayload {
        me,
        all_users,
        current_history: Vec::new(),
    });
    let value = to_value(&event);

    assert_eq!(value["event"], "init");
    assert_eq!(value["payload"]["self"]["id"], id.to_string());
    assert_eq!(
        value["payload"]["allUsers"][id.to_string()]["color"],
        "#123456"
    );
    assert_eq!(value["payload"]["currentHistory"], json!([]));

    let decoded: ServerEvent = serde_json::from_str(&event.to_json().expect("")).expect("");
    assert_eq!(decoded, event);
}

#[test]
fn it_should_encode_user_left_and_cursor_move() {
    let id = Uuid::new_v4();

    assert_eq!(
        to_value(&ServerEvent::UserLeft(id)),
        json!({"event": "userLeft", "payload": id.to_string()})
    );
    assert_eq!(
        to_value(&ServerEvent::CursorMove(CursorMoved { id, x: 3.0, y: 4.0 })),
        json!({"event": "cursorMove", "payload": {"id": id.to_string(), "x": 3.0, "y": 4.0}})
    );
}

#[test]
fn it_should_relay_coordinates_without_losing_precision() {
    let segment = match ClientEvent::from_json(
        r#"{"event":"drawSegment","payload":{"startX":0.1,"startY":16777217,"endX":1e39,"endY":2}}"#,
    )
    .expect("")
    {
        ClientEvent::DrawSegment(segment) => segment,
        other => panic!("unexpected event: {:?}", other),
    };
    let event = ServerEvent::Drawing(DrawingPayload {
        segment,
        stroke_props: red_brush(),
    });
    let value = to_value(&event);

    assert_eq!(value["payload"]["segment"]["startX"], json!(0.1));
    assert_eq!(value["payload"]["segment"]["startY"], json!(16777217.0));
    assert_eq!(value["payload"]["segment"]["endX"], json!(1e39));
    assert_eq!(value["payload"]["segment"]["endY"], json!(2.0));
}
